use crate::core::{Bounds, LinearScale, ScaleDomains, nice_bounds};
use crate::error::StripResult;
use crate::render::{RenderFrame, Renderer, SeriesPath};

use super::{DataSource, StripChart};

/// Tick count the value axis is niced against downstream.
const AXIS_TICK_COUNT: usize = 10;

impl<S: DataSource, R: Renderer> StripChart<S, R> {
    pub(super) fn scales_for(
        &self,
        domains: &ScaleDomains,
    ) -> StripResult<(LinearScale, Option<LinearScale>)> {
        let time_scale =
            LinearScale::time(domains.time, self.config.viewport, self.config.margins)?;
        let value_scale = match self.niced_value(domains) {
            Some(bounds) => Some(LinearScale::value(
                bounds,
                self.config.viewport,
                self.config.margins,
            )?),
            None => None,
        };
        Ok((time_scale, value_scale))
    }

    fn niced_value(&self, domains: &ScaleDomains) -> Option<Bounds> {
        domains.value.map(|bounds| nice_bounds(bounds, AXIS_TICK_COUNT))
    }

    /// Materializes the scene for one redraw cycle.
    ///
    /// Geometry covers the whole pre-retirement window, first point included;
    /// the point about to retire slides out through the left margin during
    /// the transition. No-data samples split the runs apart.
    pub(super) fn build_frame(&self, domains: &ScaleDomains) -> StripResult<RenderFrame> {
        let (time_scale, value_scale) = self.scales_for(domains)?;

        let mut series_paths = Vec::with_capacity(self.series.len());
        for series in self.series.values() {
            let mut polylines = Vec::new();
            if let Some(value_scale) = value_scale {
                let mut run: Vec<(f64, f64)> = Vec::new();
                for sample in series.points_for_display() {
                    match sample.value {
                        Some(v) => run
                            .push((time_scale.to_pixel(sample.time)?, value_scale.to_pixel(v)?)),
                        None => {
                            if !run.is_empty() {
                                polylines.push(std::mem::take(&mut run));
                            }
                        }
                    }
                }
                if !run.is_empty() {
                    polylines.push(run);
                }
            }
            series_paths.push(SeriesPath {
                name: series.name().to_owned(),
                polylines,
            });
        }

        Ok(RenderFrame {
            viewport: self.config.viewport,
            domains: *domains,
            niced_value: self.niced_value(domains),
            series: series_paths,
            legend: self.series.keys().cloned().collect(),
        })
    }
}
