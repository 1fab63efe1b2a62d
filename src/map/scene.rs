// src/map/scene.rs
use crate::domain::{Bounds, Hospital, LatLng, Property};
use crate::map::view::{MapSurface, MapView, Marker};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitBounds {
    pub bounds: Bounds,
    pub max_zoom: u8,
}

/// Everything the browser driver needs to replay a refresh on the real
/// map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub center: LatLng,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub fit: Option<FitBounds>,
}

/// A surface that records what it is told instead of drawing. The map
/// library is always "available" on the server.
#[derive(Debug)]
pub struct SceneSurface {
    scene: MapScene,
}

impl SceneSurface {
    pub fn new(center: LatLng) -> Self {
        Self {
            scene: MapScene {
                center,
                zoom: 0,
                markers: Vec::new(),
                fit: None,
            },
        }
    }

    pub fn into_scene(self) -> MapScene {
        self.scene
    }
}

impl MapSurface for SceneSurface {
    fn library_available(&self) -> bool {
        true
    }

    fn create_map(&mut self, center: LatLng, zoom: u8) {
        self.scene.center = center;
        self.scene.zoom = zoom;
    }

    fn set_center(&mut self, center: LatLng) {
        self.scene.center = center;
    }

    fn clear_markers(&mut self) {
        self.scene.markers.clear();
        self.scene.fit = None;
    }

    fn add_marker(&mut self, marker: &Marker) {
        self.scene.markers.push(marker.clone());
    }

    fn fit_bounds(&mut self, bounds: Bounds, max_zoom: u8) {
        self.scene.fit = Some(FitBounds { bounds, max_zoom });
    }
}

/// Runs the map view through initialization and one refresh, returning
/// the recorded scene.
pub fn build_scene(center: LatLng, hospital: Option<&Hospital>, properties: &[Property]) -> MapScene {
    let mut view = MapView::new(SceneSurface::new(center));
    view.tick(center);
    view.tick(center);
    view.refresh(center, hospital, properties);
    view.into_surface().into_scene()
}

impl MapScene {
    /// JSON safe to embed inside a `<script>` element.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "null".to_string())
            .replace("</", "<\\/")
    }
}
