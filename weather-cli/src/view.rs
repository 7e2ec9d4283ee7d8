use std::fmt::{self, Display, Formatter};
use weather_core::{Panel, Region};

/// Prints whichever container of a [`Panel`] is visible.
pub struct TerminalView<'a> {
    panel: &'a Panel,
}

impl<'a> TerminalView<'a> {
    pub const LOADING: &'static str = "Loading weather...";
    pub const UNAVAILABLE: &'static str = "Weather unavailable.";

    pub fn new(panel: &'a Panel) -> Self {
        Self { panel }
    }
}

impl Display for TerminalView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.panel.is_visible(Region::Content) {
            let lines = Region::text_fields()
                .iter()
                .map(|r| self.panel.text(*r).unwrap_or_default());
            for (i, line) in lines.enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                f.write_str(line)?;
            }
            Ok(())
        } else if self.panel.is_visible(Region::Error) {
            f.write_str(Self::UNAVAILABLE)
        } else {
            f.write_str(Self::LOADING)
        }
    }
}
