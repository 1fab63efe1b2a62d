// src/app.rs
use crate::api::HousingApi;
use crate::config::Config;
use crate::domain::Hospital;
use crate::errors::ServerError;
use crate::photos::PhotoResolver;
use crate::state::sessions::SharedState;
use crate::state::{recover, Action, Effect, ExplorerState, RequestToken, SessionRegistry};
use std::sync::Arc;
use std::thread;
use tracing::{error, info, warn};

/// Shared by every worker thread.
pub struct AppState {
    pub config: Config,
    pub api: Arc<dyn HousingApi>,
    pub sessions: SessionRegistry,
    pub photos: PhotoResolver,
}

impl AppState {
    pub fn new(config: Config, api: Arc<dyn HousingApi>) -> Self {
        Self {
            sessions: SessionRegistry::new(
                config.default_hospital.clone(),
                config.session_idle_ttl,
            ),
            photos: PhotoResolver::standard(api.clone()),
            config,
            api,
        }
    }
}

/// Dispatches `action` and performs whatever backend work it triggers.
pub fn dispatch(api: &Arc<dyn HousingApi>, state: &SharedState, action: Action) {
    let effect = recover(state.lock()).dispatch(action);
    run_effects(api, state, effect);
}

/// Executes effects until the store asks for nothing more. The hospital
/// list is fetched inline; property fetches run on their own thread so
/// the request that selected a hospital can render the loading state
/// right away. A selection made in the meantime supersedes the fetch and
/// the store drops the late answer by its request token.
pub fn run_effects(api: &Arc<dyn HousingApi>, state: &SharedState, mut effect: Effect) {
    loop {
        let action = match effect {
            Effect::None => return,
            Effect::FetchHospitals => match api.hospitals() {
                Ok(hospitals) => {
                    info!(count = hospitals.len(), "hospitals loaded");
                    Action::HospitalsLoaded(hospitals)
                }
                Err(e) => {
                    warn!(error = %e, "failed to load hospitals");
                    Action::HospitalsFailed
                }
            },
            Effect::FetchProperties { hospital, token } => {
                spawn_properties_fetch(api.clone(), state.clone(), hospital, token);
                return;
            }
        };

        effect = recover(state.lock()).dispatch(action);
    }
}

fn spawn_properties_fetch(
    api: Arc<dyn HousingApi>,
    state: SharedState,
    hospital: Hospital,
    token: RequestToken,
) {
    let worker_api = api.clone();
    let worker_state = state.clone();
    let spawned = thread::Builder::new()
        .name("properties-fetch".into())
        .spawn(move || {
            let action = fetch_properties(worker_api.as_ref(), &hospital, token);
            let next = recover(worker_state.lock()).dispatch(action);
            run_effects(&worker_api, &worker_state, next);
        });

    if let Err(e) = spawned {
        error!(error = %e, "could not start properties fetch");
        let next = recover(state.lock()).dispatch(Action::PropertiesFailed { token });
        run_effects(&api, &state, next);
    }
}

fn fetch_properties(api: &dyn HousingApi, hospital: &Hospital, token: RequestToken) -> Action {
    info!(hospital = %hospital.name, ?token, "fetching properties");
    match api.properties(hospital) {
        Ok(properties) => {
            info!(hospital = %hospital.name, count = properties.len(), "properties loaded");
            Action::PropertiesLoaded { token, properties }
        }
        Err(e) => {
            warn!(hospital = %hospital.name, error = %e, "failed to load properties");
            Action::PropertiesFailed { token }
        }
    }
}

/// Selects a hospital by name. Re-selecting the current hospital is a no-op.
pub fn select_hospital(
    api: &Arc<dyn HousingApi>,
    state: &SharedState,
    name: &str,
) -> Result<(), ServerError> {
    let effect = {
        let mut s = recover(state.lock());
        let hospital = s
            .hospital_named(name)
            .cloned()
            .ok_or_else(|| ServerError::BadRequest(format!("unknown hospital: {name}")))?;

        if s.selected.as_ref() == Some(&hospital) {
            return Ok(());
        }
        s.dispatch(Action::SelectHospital(hospital))
    };

    run_effects(api, state, effect);
    Ok(())
}

pub fn snapshot(state: &SharedState) -> ExplorerState {
    recover(state.lock()).clone()
}
