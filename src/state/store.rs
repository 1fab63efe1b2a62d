// src/state/store.rs
use crate::domain::geo::{LatLng, DEFAULT_CENTER};
use crate::domain::{apply_filters, CommuteScenario, FilterCriteria, Hospital, Property};
use tracing::debug;

/// Stamp for one property fetch. Only the latest issued stamp may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalsStatus {
    NotRequested,
    Loading,
    /// Loaded, or failed and left empty. Either way it is not fetched again.
    Settled,
}

#[derive(Debug, Clone)]
pub enum Action {
    LoadHospitals,
    HospitalsLoaded(Vec<Hospital>),
    HospitalsFailed,
    SelectHospital(Hospital),
    PropertiesLoaded {
        token: RequestToken,
        properties: Vec<Property>,
    },
    PropertiesFailed {
        token: RequestToken,
    },
    SetSearch(String),
    SetMaxCommute(u32),
    SetMinRating(f64),
    SetScenario(CommuteScenario),
}

/// Work the caller must perform after a dispatch, outside any lock.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FetchHospitals,
    FetchProperties {
        hospital: Hospital,
        token: RequestToken,
    },
}

/// Everything one browser session sees. The filtered list is always
/// `apply_filters(properties, criteria)`.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    preferred_hospital: String,
    pub hospitals: Vec<Hospital>,
    pub hospitals_status: HospitalsStatus,
    pub selected: Option<Hospital>,
    pub map_center: LatLng,
    pub properties: Vec<Property>,
    pub filtered: Vec<Property>,
    pub criteria: FilterCriteria,
    pub scenario: CommuteScenario,
    pub loading_properties: bool,
    issued: u64,
    pending: Option<RequestToken>,
}

impl ExplorerState {
    pub fn new(preferred_hospital: impl Into<String>) -> Self {
        Self {
            preferred_hospital: preferred_hospital.into(),
            hospitals: Vec::new(),
            hospitals_status: HospitalsStatus::NotRequested,
            selected: None,
            map_center: DEFAULT_CENTER,
            properties: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            scenario: CommuteScenario::default(),
            loading_properties: false,
            issued: 0,
            pending: None,
        }
    }

    pub fn hospitals_settled(&self) -> bool {
        self.hospitals_status == HospitalsStatus::Settled
    }

    pub fn hospital_named(&self, name: &str) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.name == name)
    }

    pub fn dispatch(&mut self, action: Action) -> Effect {
        match action {
            Action::LoadHospitals => {
                if self.hospitals_status != HospitalsStatus::NotRequested {
                    return Effect::None;
                }
                self.hospitals_status = HospitalsStatus::Loading;
                Effect::FetchHospitals
            }
            Action::HospitalsLoaded(hospitals) => {
                self.hospitals = hospitals;
                self.hospitals_status = HospitalsStatus::Settled;

                let auto = self
                    .hospital_named(&self.preferred_hospital)
                    .or_else(|| self.hospitals.first())
                    .cloned();

                match auto {
                    Some(hospital) => self.select(hospital),
                    None => Effect::None,
                }
            }
            Action::HospitalsFailed => {
                self.hospitals.clear();
                self.hospitals_status = HospitalsStatus::Settled;
                Effect::None
            }
            Action::SelectHospital(hospital) => self.select(hospital),
            Action::PropertiesLoaded { token, properties } => {
                if self.accept(token) {
                    self.properties = properties;
                    self.refilter();
                }
                Effect::None
            }
            Action::PropertiesFailed { token } => {
                if self.accept(token) {
                    self.properties.clear();
                    self.refilter();
                }
                Effect::None
            }
            Action::SetSearch(search) => {
                self.criteria.search = search;
                self.refilter();
                Effect::None
            }
            Action::SetMaxCommute(minutes) => {
                self.criteria.max_commute = minutes;
                self.refilter();
                Effect::None
            }
            Action::SetMinRating(rating) => {
                self.criteria.min_rating = rating;
                self.refilter();
                Effect::None
            }
            Action::SetScenario(scenario) => {
                self.scenario = scenario;
                Effect::None
            }
        }
    }

    fn select(&mut self, hospital: Hospital) -> Effect {
        self.map_center = hospital.position();
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.pending = Some(token);
        self.loading_properties = true;
        self.properties.clear();
        self.filtered.clear();
        self.selected = Some(hospital.clone());

        Effect::FetchProperties { hospital, token }
    }

    /// Consumes the pending token if `token` is it.
    fn accept(&mut self, token: RequestToken) -> bool {
        if self.pending != Some(token) {
            debug!(?token, latest = ?self.pending, "discarding stale property response");
            return false;
        }
        self.pending = None;
        self.loading_properties = false;
        true
    }

    fn refilter(&mut self) {
        self.filtered = apply_filters(&self.properties, &self.criteria);
    }
}
