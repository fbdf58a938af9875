//! The gallery session: tiles, their formations and their animation.
//!
//! [`Gallery`] is what a host application holds on to. It ingests records,
//! scatters the new tiles, keeps the [`FormationSet`] in step with the tile
//! count, and turns [`GalleryCommand`]s into transitions. The host pumps
//! [`Gallery::tick`] once per display frame and repaints from the render
//! callback.

mod command;
mod viewport;

use std::time::Duration;

pub use command::GalleryCommand;
pub use viewport::Viewport;

use crate::animation::{AnimationContext, RenderTarget};
use crate::error::TilescapeError;
use crate::ingest::{self, IngestIssue, Tile};
use crate::layout::{Formation, FormationKind, FormationSet};
use crate::options::{LayoutOptions, Options};
use crate::scatter;

/// A set of tiles animated between formations.
#[derive(Debug, Clone)]
pub struct Gallery {
    options: Options,
    tiles: Vec<Tile>,
    formations: FormationSet,
    animation: AnimationContext,
    viewport: Viewport,
    current: Option<FormationKind>,
}

impl Gallery {
    /// Empty gallery with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let formations = FormationSet::rebuild(0, &options.layout);
        let animation = AnimationContext::default()
            .with_easing(options.animation.easing)
            .with_overlap(options.animation.overlap);
        Self {
            options,
            tiles: Vec::new(),
            formations,
            animation,
            viewport: Viewport::default(),
            current: None,
        }
    }

    /// Append tiles. Each new tile starts at a random scatter position;
    /// tiles already present keep their position and any transition.
    ///
    /// Formations are rebuilt when the tile count changes.
    pub fn add_tiles(&mut self, tiles: Vec<Tile>) {
        if tiles.is_empty() {
            return;
        }
        let start = scatter::scatter_with(tiles.len(), &self.options.scatter);
        for position in start {
            let _index = self.animation.push_item(position);
        }
        self.tiles.extend(tiles);
        self.sync_formations();
    }

    /// Ingest a JSON array of rows and add the resulting tiles.
    ///
    /// Returns the per-row issues; only a document that is not an array of
    /// rows is an error.
    pub fn load_json(
        &mut self,
        json: &str,
    ) -> Result<Vec<IngestIssue>, TilescapeError> {
        let report = ingest::ingest_json(json, &self.options.ingest)?;
        log::info!(
            "loaded {} tiles ({} row issues)",
            report.tiles.len(),
            report.issues.len()
        );
        self.add_tiles(report.tiles);
        Ok(report.issues)
    }

    /// Run one gallery command.
    pub fn execute(
        &mut self,
        command: GalleryCommand,
    ) -> Result<(), TilescapeError> {
        match command {
            GalleryCommand::Transform { kind, duration } => {
                let duration =
                    duration.unwrap_or_else(|| self.options.animation.duration());
                self.transform(kind, duration)
            }
            GalleryCommand::Resize { width, height } => {
                self.resize(width, height);
                Ok(())
            }
            GalleryCommand::Skip => {
                self.animation.skip();
                Ok(())
            }
            GalleryCommand::Cancel => {
                self.animation.cancel();
                Ok(())
            }
        }
    }

    /// Move every tile to `kind` over `duration`.
    pub fn transform(
        &mut self,
        kind: FormationKind,
        duration: Duration,
    ) -> Result<(), TilescapeError> {
        log::info!("formation {kind} over {} ms", duration.as_millis());
        self.animation
            .transform(self.formations.get(kind), duration)?;
        self.current = Some(kind);
        Ok(())
    }

    /// Record a new viewport size. Tile positions are not touched.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {width}x{height}");
        self.viewport = Viewport::new(width, height);
    }

    /// Advance the animation by `dt` and repaint if the render clock is
    /// running. Returns whether anything is still animating.
    pub fn tick<R>(&mut self, dt: Duration, render: &mut R) -> bool
    where
        R: RenderTarget + ?Sized,
    {
        self.animation.tick(dt, render)
    }

    /// Replace the layout parameters and recompute every formation.
    ///
    /// Transitions already in flight keep their old targets.
    pub fn set_layout_options(&mut self, layout: LayoutOptions) {
        self.options.layout = layout;
        self.formations =
            FormationSet::rebuild(self.tiles.len(), &self.options.layout);
    }

    /// Ingested tiles, in item order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Formations for the current tile count.
    #[must_use]
    pub fn formations(&self) -> &FormationSet {
        &self.formations
    }

    /// Target formation of the given kind.
    #[must_use]
    pub fn formation(&self, kind: FormationKind) -> &Formation {
        self.formations.get(kind)
    }

    /// The animation context holding live tile positions.
    #[must_use]
    pub fn animation(&self) -> &AnimationContext {
        &self.animation
    }

    /// Mutable access to the animation context.
    pub fn animation_mut(&mut self) -> &mut AnimationContext {
        &mut self.animation
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The formation most recently selected, if any.
    #[must_use]
    pub fn current_formation(&self) -> Option<FormationKind> {
        self.current
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn sync_formations(&mut self) {
        let total = self.tiles.len();
        if self.formations.len() != total {
            self.formations =
                FormationSet::rebuild(total, &self.options.layout);
        }
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(n: usize) -> Vec<Tile> {
        (0..n)
            .map(|i| Tile {
                label: format!("tile {i}"),
                image: String::new(),
                value: i as f64,
            })
            .collect()
    }

    fn seeded() -> Options {
        let mut options = Options::default();
        options.scatter.seed = Some(42);
        options
    }

    #[test]
    fn test_add_tiles_scatters_and_rebuilds() {
        let mut gallery = Gallery::new(seeded());
        gallery.add_tiles(tiles(7));
        assert_eq!(gallery.tiles().len(), 7);
        assert_eq!(gallery.animation().len(), 7);
        assert_eq!(gallery.formations().len(), 7);
        let extent = gallery.options().scatter.extent;
        assert!(gallery
            .animation()
            .positions()
            .all(|p| p.abs().max_element() <= extent));
    }

    #[test]
    fn test_existing_tiles_keep_their_positions() {
        let mut gallery = Gallery::new(seeded());
        gallery.add_tiles(tiles(3));
        let before: Vec<_> = gallery.animation().positions().collect();
        gallery.add_tiles(tiles(2));
        let after: Vec<_> = gallery.animation().positions().take(3).collect();
        assert_eq!(before, after);
        assert_eq!(gallery.formations().len(), 5);
    }

    #[test]
    fn test_select_uses_default_duration() {
        let mut gallery = Gallery::new(seeded());
        gallery.add_tiles(tiles(4));
        gallery
            .execute(GalleryCommand::select(FormationKind::Helix))
            .unwrap();
        assert_eq!(gallery.current_formation(), Some(FormationKind::Helix));
        assert_eq!(
            gallery.animation().task(0).unwrap().remaining(),
            Duration::from_millis(2000)
        );
    }

    #[test]
    fn test_resize_leaves_positions_alone() {
        let mut gallery = Gallery::new(seeded());
        gallery.add_tiles(tiles(4));
        gallery
            .transform(FormationKind::Grid, Duration::from_millis(1000))
            .unwrap();
        let mut render = || {};
        let _ = gallery.tick(Duration::from_millis(300), &mut render);
        let before: Vec<_> = gallery.animation().positions().collect();

        gallery
            .execute(GalleryCommand::Resize {
                width: 640,
                height: 480,
            })
            .unwrap();
        assert_eq!(gallery.viewport(), Viewport::new(640, 480));
        assert!((gallery.viewport().aspect() - 4.0 / 3.0).abs() < 1e-12);
        assert!(gallery.animation().positions().eq(before.into_iter()));
        assert!(gallery.animation().is_animating());
    }

    #[test]
    fn test_layout_options_change_recomputes_targets() {
        let mut gallery = Gallery::new(seeded());
        gallery.add_tiles(tiles(3));
        let mut layout = LayoutOptions::default();
        layout.sphere.radius = 10.0;
        gallery.set_layout_options(layout);
        for p in gallery.formation(FormationKind::Sphere).positions() {
            assert!((p.length() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_gallery_transform_still_renders() {
        let mut gallery = Gallery::default();
        gallery
            .execute(GalleryCommand::Transform {
                kind: FormationKind::Table,
                duration: Some(Duration::from_millis(32)),
            })
            .unwrap();
        let mut frames = 0;
        let mut render = || frames += 1;
        while gallery.tick(Duration::from_millis(16), &mut render) {}
        assert_eq!(frames, 2);
    }

    #[test]
    fn test_load_json_reports_issues() {
        let mut gallery = Gallery::new(seeded());
        let issues = gallery
            .load_json(
                r#"[["Name","Photo","","","","Worth"],
                    ["A","a.png","","","","$10"],
                    ["B","b.png","","","","??"]]"#,
            )
            .unwrap();
        assert_eq!(gallery.tiles().len(), 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, 2);
    }
}
