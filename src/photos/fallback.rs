// src/photos/fallback.rs

/// Curated stock apartment photos used when no real photo resolves.
pub const FALLBACK_IMAGES: [&str; 8] = [
    "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1571055107559-3e67626fa8be?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1515263487990-61b07816b507?w=400&h=250&fit=crop",
    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=400&h=250&fit=crop",
];

/// Shown in a card until its photo slot resolves, and when the image fails to load.
pub const PLACEHOLDER_IMAGE: &str = FALLBACK_IMAGES[0];

/// Deterministic pick from the stock set. Name length is counted in UTF-16
/// code units so the choice matches what browsers compute for the same name.
pub fn fallback_image(property_name: &str, position: usize) -> &'static str {
    let name_len = property_name.encode_utf16().count();
    FALLBACK_IMAGES[(name_len + position) % FALLBACK_IMAGES.len()]
}
