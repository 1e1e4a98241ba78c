#![forbid(unsafe_code)]

//! Font scaling of the document body.
//!
//! The scale is the only writer of the body's inline `font-size`; every
//! click writes the absolute value, so state and style never drift apart.

use tracing::debug;

use crate::config::FontConfig;
use crate::error::PageError;
use crate::page::{BodyStyle, Page};

/// Scale every controller starts from.
pub const INITIAL_PERCENT: u32 = 100;

/// Body font scale, in whole percent of the page's own size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    percent: u32,
    step: u32,
    min: u32,
}

impl FontScale {
    #[must_use]
    pub const fn new(config: FontConfig) -> Self {
        Self {
            percent: INITIAL_PERCENT,
            step: config.step_percent,
            min: config.min_percent,
        }
    }

    #[must_use]
    pub const fn percent(&self) -> u32 {
        self.percent
    }

    /// One step up. No ceiling.
    pub fn increase<P: Page + ?Sized>(&mut self, page: &mut P) -> Result<u32, PageError> {
        self.percent = self.percent.saturating_add(self.step);
        self.apply(page)
    }

    /// One step down, clamped at the floor.
    pub fn decrease<P: Page + ?Sized>(&mut self, page: &mut P) -> Result<u32, PageError> {
        self.percent = self.percent.saturating_sub(self.step).max(self.min);
        self.apply(page)
    }

    fn apply<P: Page + ?Sized>(&self, page: &mut P) -> Result<u32, PageError> {
        let value = em_value(self.percent);
        page.set_body_style(BodyStyle::FontSize, &value)?;
        debug!(percent = self.percent, %value, "font scale applied");
        Ok(self.percent)
    }
}

/// Render a percentage as a CSS `em` length without float noise.
#[must_use]
pub fn em_value(percent: u32) -> String {
    let whole = percent / 100;
    let frac = percent % 100;
    if frac == 0 {
        format!("{whole}em")
    } else if frac % 10 == 0 {
        format!("{whole}.{}em", frac / 10)
    } else {
        format!("{whole}.{frac:02}em")
    }
}
