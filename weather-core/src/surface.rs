//! The presentation side of the widget.
//!
//! A [`Surface`] owns six pre-existing regions: three containers (loading,
//! content, error) whose visibility is toggled, and three text regions inside
//! the content container. The widget never creates or destroys regions; it only
//! shows, hides and sets text.

use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Loading,
    Content,
    Error,
    Temperature,
    Condition,
    Wind,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Loading => "weather-loading",
            Region::Content => "weather-content",
            Region::Error => "weather-error",
            Region::Temperature => "weather-temp",
            Region::Condition => "weather-condition",
            Region::Wind => "weather-wind",
        }
    }

    /// Regions whose visibility the widget toggles.
    pub const fn containers() -> &'static [Region] {
        &[Region::Loading, Region::Content, Region::Error]
    }

    /// Regions whose text the widget sets.
    pub const fn text_fields() -> &'static [Region] {
        &[Region::Temperature, Region::Condition, Region::Wind]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Surface: Send + Debug {
    fn set_visible(&mut self, region: Region, visible: bool);

    fn set_text(&mut self, region: Region, text: &str);
}

/// In-memory surface recording what the widget asked for.
///
/// All containers start hidden and all text fields start unset (`None`), so a
/// field that was never written can be told apart from one written empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    pub loading: bool,
    pub content: bool,
    pub error: bool,
    pub temperature: Option<String>,
    pub condition: Option<String>,
    pub wind: Option<String>,
}

impl Panel {
    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::Loading => self.loading,
            Region::Content => self.content,
            Region::Error => self.error,
            // Text fields live inside the content container.
            Region::Temperature | Region::Condition | Region::Wind => self.content,
        }
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        match region {
            Region::Temperature => self.temperature.as_deref(),
            Region::Condition => self.condition.as_deref(),
            Region::Wind => self.wind.as_deref(),
            Region::Loading | Region::Content | Region::Error => None,
        }
    }

    /// Number of visible containers.
    pub fn visible_containers(&self) -> usize {
        Region::containers()
            .iter()
            .filter(|r| self.is_visible(**r))
            .count()
    }

    /// True when no text field has been written yet.
    pub fn is_blank(&self) -> bool {
        Region::text_fields().iter().all(|r| self.text(*r).is_none())
    }
}

impl Surface for Panel {
    fn set_visible(&mut self, region: Region, visible: bool) {
        match region {
            Region::Loading => self.loading = visible,
            Region::Content => self.content = visible,
            Region::Error => self.error = visible,
            Region::Temperature | Region::Condition | Region::Wind => {
                tracing::debug!("ignoring visibility change on text region {region}");
            }
        }
    }

    fn set_text(&mut self, region: Region, text: &str) {
        let slot = match region {
            Region::Temperature => &mut self.temperature,
            Region::Condition => &mut self.condition,
            Region::Wind => &mut self.wind,
            Region::Loading | Region::Content | Region::Error => {
                tracing::debug!("ignoring text on container region {region}");
                return;
            }
        };
        *slot = Some(text.to_owned());
    }
}
