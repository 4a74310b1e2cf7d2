//! Fixed companion-source template.

/// Values interpolated into the companion template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateContext<'a> {
    /// Namespace that re-opens the declaration.
    pub container: &'a str,
    /// Declaration keyword (`class`, `struct`, ...).
    pub keyword: &'a str,
    /// Declaration name.
    pub name: &'a str,
    /// Name of the generated method.
    pub method: &'a str,
    /// Text the generated method prints.
    pub message: &'a str,
}

/// Renders the companion fragment for `ctx`.
///
/// The output re-opens the declaration as `partial` inside its container and
/// adds one method that writes `ctx.message` to the console. Values are
/// inserted verbatim.
///
/// # Examples
///
/// ```
/// use augmentor::synthesize::{TemplateContext, render};
///
/// let text = render(&TemplateContext {
///     container: "Acme",
///     keyword: "class",
///     name: "Foo",
///     method: "HelloWorld",
///     message: "Hello, World!",
/// });
/// assert!(text.contains("namespace Acme\n{\n    partial class Foo\n"));
/// ```
#[must_use]
pub fn render(ctx: &TemplateContext<'_>) -> String {
    let TemplateContext {
        container,
        keyword,
        name,
        method,
        message,
    } = *ctx;
    format!(
        "\n\
namespace {container}\n\
{{\n    \
    partial {keyword} {name}\n    \
    {{\n        \
        public void {method}()\n        \
        {{\n            \
            Console.WriteLine(\"{message}\");\n        \
        }}\n    \
    }}\n\
}}\n"
    )
}
