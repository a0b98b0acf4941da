//! One-shot locator, the geolocation collaborator.
//!
//! Fires once per invocation and either yields a map center or fails.
//! Failure is not fatal: the caller warns and renders without a center.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::coords::Coords;

pub trait Locator {
    fn current_position(&self) -> AppResult<Coords>;
}

/// Resolves the position from the configured home coordinates.
pub struct ConfigLocator<'a> {
    cfg: &'a Config,
}

impl<'a> ConfigLocator<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }
}

impl Locator for ConfigLocator<'_> {
    fn current_position(&self) -> AppResult<Coords> {
        match (self.cfg.home_lat, self.cfg.home_lng) {
            (Some(lat), Some(lng)) => Ok(Coords::new(lat, lng)),
            _ => Err(AppError::PositionUnavailable),
        }
    }
}
