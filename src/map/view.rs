// src/map/view.rs
use crate::domain::commute::HOSPITAL_MARKER_COLOR;
use crate::domain::{Bounds, Hospital, LatLng, Property};
use crate::map::popup::{hospital_popup, property_popup};
use serde::Serialize;

pub const INITIAL_ZOOM: u8 = 11;
/// Fitting bounds never zooms in closer than this, even when every
/// marker sits on the same spot.
pub const MAX_FIT_ZOOM: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Hospital,
    Property,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: LatLng,
    pub title: String,
    pub fill_color: &'static str,
    pub fill_opacity: f32,
    pub stroke_weight: u8,
    pub scale: u8,
    /// Commute bucket color name, property markers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<&'static str>,
    pub popup_html: String,
}

impl Marker {
    fn for_hospital(hospital: &Hospital) -> Self {
        Self {
            kind: MarkerKind::Hospital,
            position: hospital.position(),
            title: hospital.name.clone(),
            fill_color: HOSPITAL_MARKER_COLOR,
            fill_opacity: 1.0,
            stroke_weight: 3,
            scale: 12,
            bucket: None,
            popup_html: hospital_popup(hospital).into_string(),
        }
    }

    fn for_property(property: &Property) -> Self {
        let bucket = property.commute_bucket();
        Self {
            kind: MarkerKind::Property,
            position: property.position(),
            title: property.property_name.clone(),
            fill_color: bucket.marker_color(),
            fill_opacity: 0.8,
            stroke_weight: 2,
            scale: 8,
            bucket: Some(bucket.color_name()),
            popup_html: property_popup(property).into_string(),
        }
    }
}

/// The third-party map widget, reduced to what the view drives.
pub trait MapSurface {
    fn library_available(&self) -> bool;
    fn create_map(&mut self, center: LatLng, zoom: u8);
    fn set_center(&mut self, center: LatLng);
    fn clear_markers(&mut self);
    fn add_marker(&mut self, marker: &Marker);
    fn fit_bounds(&mut self, bounds: Bounds, max_zoom: u8);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPhase {
    Uninitialized,
    /// Waiting for the map library to become available.
    Initializing,
    Ready,
}

/// Owns the surface and its marker set; nothing else writes to either.
/// Popups belong to the widget: it keeps a single shared one and
/// repoints it on every marker click.
pub struct MapView<S: MapSurface> {
    surface: S,
    phase: MapPhase,
    markers: Vec<Marker>,
}

impl<S: MapSurface> MapView<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            phase: MapPhase::Uninitialized,
            markers: Vec::new(),
        }
    }

    /// One poll step of initialization.
    pub fn tick(&mut self, center: LatLng) -> MapPhase {
        self.phase = match self.phase {
            MapPhase::Uninitialized => MapPhase::Initializing,
            MapPhase::Initializing if self.surface.library_available() => {
                self.surface.create_map(center, INITIAL_ZOOM);
                MapPhase::Ready
            }
            other => other,
        };
        self.phase
    }

    /// Rebuilds every marker. Does nothing until the view is ready.
    pub fn refresh(
        &mut self,
        center: LatLng,
        hospital: Option<&Hospital>,
        properties: &[Property],
    ) -> bool {
        if self.phase != MapPhase::Ready {
            return false;
        }

        self.surface.clear_markers();
        self.markers.clear();

        self.surface.set_center(center);

        let markers = hospital
            .map(Marker::for_hospital)
            .into_iter()
            .chain(properties.iter().map(Marker::for_property));

        for marker in markers {
            self.surface.add_marker(&marker);
            self.markers.push(marker);
        }

        if self.markers.len() > 1 {
            if let Some(bounds) = Bounds::from_points(self.markers.iter().map(|m| m.position))
            {
                self.surface.fit_bounds(bounds, MAX_FIT_ZOOM);
            }
        }

        true
    }

    #[cfg(test)]
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
