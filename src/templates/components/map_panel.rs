use crate::domain::CommuteBucket;
use crate::domain::commute::HOSPITAL_MARKER_COLOR;
use crate::map::build_scene;
use crate::state::ExplorerState;
use maud::{html, Markup, PreEscaped};

/// Replays the scene recorded in `#map-scene` on the Google map. The
/// canvas lives outside the swapped region so the widget survives every
/// results swap; only the scene element is replaced.
const MAP_DRIVER: &str = r#"
(function () {
  var map = null, markers = [], popup = null, zoomCap = null, loading = false;

  function readScene() {
    var el = document.getElementById('map-scene');
    if (!el) return null;
    try { return JSON.parse(el.textContent); } catch (e) { return null; }
  }

  function showError(message) {
    var el = document.getElementById('map-error');
    if (el) { el.textContent = message; el.classList.remove('hidden'); }
  }

  function loadLibrary() {
    if (window.google && window.google.maps) return;
    if (loading) return;
    loading = true;
    fetch('/api/maps-key')
      .then(function (r) { return r.json(); })
      .then(function (data) {
        if (!data.apiKey) { showError('Map unavailable: ' + (data.error || 'no API key')); return; }
        var s = document.createElement('script');
        s.src = 'https://maps.googleapis.com/maps/api/js?key=' + encodeURIComponent(data.apiKey);
        s.async = true;
        s.onerror = function () { showError('Failed to load Google Maps'); };
        document.head.appendChild(s);
      })
      .catch(function () { showError('Failed to fetch maps key'); });
  }

  function init(scene) {
    map = new google.maps.Map(document.getElementById('map-canvas'), {
      center: scene.center,
      zoom: scene.zoom,
      styles: [{ featureType: 'poi', elementType: 'labels', stylers: [{ visibility: 'off' }] }],
      mapTypeControl: false,
      streetViewControl: false,
      fullscreenControl: true,
      zoomControl: true
    });
    popup = new google.maps.InfoWindow();
  }

  function sync() {
    var scene = readScene();
    if (!scene || !map) return;
    markers.forEach(function (m) { m.setMap(null); });
    markers = [];
    popup.close();
    if (zoomCap) { google.maps.event.removeListener(zoomCap); zoomCap = null; }

    map.setCenter(scene.center);
    scene.markers.forEach(function (spec) {
      var marker = new google.maps.Marker({
        position: spec.position,
        map: map,
        title: spec.title,
        icon: {
          path: google.maps.SymbolPath.CIRCLE,
          scale: spec.scale,
          fillColor: spec.fill_color,
          fillOpacity: spec.fill_opacity,
          strokeColor: '#ffffff',
          strokeWeight: spec.stroke_weight
        }
      });
      marker.addListener('click', function () {
        popup.setContent(spec.popup_html);
        popup.open(map, marker);
      });
      markers.push(marker);
    });

    if (scene.fit) {
      zoomCap = google.maps.event.addListenerOnce(map, 'bounds_changed', function () {
        if (map.getZoom() > scene.fit.max_zoom) map.setZoom(scene.fit.max_zoom);
      });
      map.fitBounds(scene.fit.bounds);
    }
  }

  function tick() {
    if (map) { sync(); return; }
    if (window.google && window.google.maps && readScene()) {
      init(readScene());
      sync();
      return;
    }
    loadLibrary();
    setTimeout(tick, 100);
  }

  document.body.addEventListener('htmx:afterSettle', function () { if (map) sync(); });
  tick();
})();
"#;

fn legend() -> Markup {
    html! {
        div class="flex flex-wrap items-center gap-4 text-xs text-gray-600" {
            div class="flex items-center gap-1" {
                span class="inline-block w-3 h-3 rounded-full" style={ "background:" (HOSPITAL_MARKER_COLOR) } {}
                "Hospital"
            }
            @for bucket in CommuteBucket::ALL {
                div class="flex items-center gap-1" {
                    span class="inline-block w-3 h-3 rounded-full" style={ "background:" (bucket.marker_color()) } {}
                    (bucket.legend_label())
                }
            }
        }
    }
}

/// Swappable part of the map panel: loading overlay, marker counter and
/// the scene the driver replays.
pub fn map_status(state: &ExplorerState, oob: bool) -> Markup {
    let scene = build_scene(state.map_center, state.selected.as_ref(), &state.filtered);

    html! {
        div id="map-status" hx-swap-oob=[oob.then_some("true")] {
            @if state.loading_properties {
                div class="absolute inset-0 bg-white/70 flex items-center justify-center z-10 rounded-xl" {
                    div class="text-sm text-gray-700" { "Loading properties..." }
                }
            }
            div class="text-xs text-gray-500 mt-2" {
                (state.filtered.len()) " properties shown"
            }
            script type="application/json" id="map-scene" {
                (PreEscaped(scene.to_embedded_json()))
            }
        }
    }
}

pub fn map_panel(state: &ExplorerState) -> Markup {
    html! {
        div class="lg:col-span-2 card bg-white rounded-xl shadow-sm p-4 relative" {
            div class="flex justify-between items-center mb-3" {
                h2 class="text-lg font-semibold text-gray-900" { "🗺️ Map" }
                (legend())
            }
            div id="map-canvas" class="w-full h-[32rem] rounded-lg bg-gray-100" {}
            div id="map-error" class="hidden text-sm text-red-600 mt-2" {}
            (map_status(state, false))
            script { (PreEscaped(MAP_DRIVER)) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::{hospital, property};

    #[test]
    fn driver_shares_one_popup_across_markers() {
        assert_eq!(MAP_DRIVER.matches("new google.maps.InfoWindow").count(), 1);
        assert!(MAP_DRIVER.contains("popup.setContent(spec.popup_html)"));
        assert!(MAP_DRIVER.contains("popup.close()"));
    }

    #[test]
    fn status_embeds_scene_for_filtered_properties() {
        let mut state = ExplorerState::new("Northside Hospital Gwinnett");
        let h = hospital("Northside Hospital Gwinnett", 33.96, -83.99);
        state.map_center = h.position();
        state.selected = Some(h);
        state.filtered = vec![property("Sugarloaf Commons", "1 Sugarloaf Pkwy", 12, 4.3)];

        let html = map_status(&state, true).into_string();
        assert!(html.contains(r#"id="map-status" hx-swap-oob="true""#));
        assert!(html.contains("1 properties shown"));
        assert!(html.contains(r#""bucket":"green""#));
        assert!(!html.contains("Loading properties..."));
    }
}
