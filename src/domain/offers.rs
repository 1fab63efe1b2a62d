// src/domain/offers.rs

const PRICES: [&str; 8] = [
    "$1,850", "$2,100", "$1,950", "$2,250", "$1,750", "$2,400", "$1,650", "$2,050",
];

const CONCESSIONS: [&str; 8] = [
    "1 month free",
    "$1,000 off first month",
    "2 months free",
    "1.5 months free",
    "$500 off + waived fees",
    "No deposit required",
    "6 weeks free",
    "$1,200 off first month",
];

const APP_FEES: [&str; 8] = [
    "Waived on AnchorMatch",
    "$15",
    "$50",
    "Waived on AnchorMatch",
    "$25",
    "$15",
    "Waived on AnchorMatch",
    "$35",
];

/// Teaser shown on a listing card. Chosen by list position, not by listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOffer {
    pub price: &'static str,
    pub concession: &'static str,
    pub app_fee: &'static str,
}

impl ListingOffer {
    pub fn for_position(position: usize) -> Self {
        Self {
            price: PRICES[position % PRICES.len()],
            concession: CONCESSIONS[position % CONCESSIONS.len()],
            app_fee: APP_FEES[position % APP_FEES.len()],
        }
    }

    pub fn app_fee_waived(&self) -> bool {
        self.app_fee.contains("Waived")
    }
}
