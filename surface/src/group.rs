//! Display grouping for generated flags.
//!
//! Groups are purely a help-output concern: they become section headings in
//! the generated usage text and have no effect on resolution semantics.

/// A named display section of schema options.
///
/// # Examples
///
/// ```
/// use option_schema_surface::OptionGroup;
///
/// let group = OptionGroup::new("Proxy Options")
///     .option("listen_host")
///     .option("listen_port");
/// assert_eq!(group.heading(), Some("Proxy Options"));
/// assert_eq!(group.options().count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionGroup {
    heading: Option<String>,
    options: Vec<String>,
}

impl OptionGroup {
    /// Creates a group rendered under the given heading.
    pub fn new(heading: &str) -> Self {
        Self {
            heading: Some(heading.to_string()),
            options: Vec::new(),
        }
    }

    /// Creates a group without a heading (top-level options).
    pub fn ungrouped() -> Self {
        Self::default()
    }

    /// Adds an option (by schema name) to this group.
    pub fn option(mut self, name: &str) -> Self {
        self.options.push(name.to_string());
        self
    }

    /// The section heading, if any.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Iterates the option names in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }
}
