//! xbar menu line grammar.
//!
//! Each line is `text | key=value ...`; nesting uses leading `--` pairs and
//! `---` separates sections. Parameter order follows what xbar documents:
//! image, refresh, length, then the shell command.

/// Section separator line.
pub const SEPARATOR: &str = "---";

/// One xbar menu line under construction.
#[derive(Debug, Default)]
pub struct MenuLine {
    text: String,
    icon: Option<String>,
    depth: usize,
    image: Option<String>,
    refresh: bool,
    length: Option<usize>,
    command: Option<(String, String)>,
}

impl MenuLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn image(mut self, data: impl Into<String>) -> Self {
        self.image = Some(data.into());
        self
    }

    pub fn refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Run `command` through `shell` as a login-interactive invocation when
    /// the line is clicked.
    pub fn command(mut self, shell: impl Into<String>, command: impl Into<String>) -> Self {
        self.command = Some((shell.into(), command.into()));
        self
    }

    pub fn render(&self) -> String {
        let mut out = match &self.icon {
            Some(icon) => format!("{icon} {}", self.text),
            None => self.text.clone(),
        };
        out = format!("{}{}", "--".repeat(self.depth), out);
        if let Some(image) = &self.image {
            out.push_str(&format!(" | image=\"{image}\""));
        }
        if self.refresh {
            out.push_str(" | refresh=true");
        }
        if let Some(length) = self.length {
            out.push_str(&format!(" | length={length}"));
        }
        if let Some((shell, command)) = &self.command {
            out.push_str(&format!(
                " | shell=\"{shell}\" param1=-lic param2=\"{command}\""
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text() {
        assert_eq!(MenuLine::new("Recent").render(), "Recent");
    }

    #[test]
    fn icon_prefix_and_depth_dashes() {
        let line = MenuLine::new("proj").icon("X").depth(2).render();
        assert_eq!(line, "----X proj");
    }

    #[test]
    fn parameter_order() {
        let line = MenuLine::new("Edit")
            .refresh()
            .length(120)
            .command("/bin/zsh", "echo hi")
            .render();
        assert_eq!(
            line,
            "Edit | refresh=true | length=120 | shell=\"/bin/zsh\" param1=-lic param2=\"echo hi\""
        );
    }

    #[test]
    fn image_line() {
        let line = MenuLine::new("").image("QUJD").render();
        assert_eq!(line, " | image=\"QUJD\"");
    }
}
