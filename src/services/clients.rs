// src/services/clients.rs
use log::debug;
use once_cell::sync::Lazy;

use crate::models::ClientProfile;

pub const DEFAULT_CLIENT_ID: &str = "unitx-lab";

static CLIENT_PROFILES: Lazy<Vec<ClientProfile>> = Lazy::new(|| {
    vec![
        profile(
            DEFAULT_CLIENT_ID,
            "https://www.unitxlabs.com/wp-content/uploads/2025/01/black-square-256-favicon.png",
            "Unitx Lab AI",
            "AI Integration",
            "US",
        ),
        profile(
            "sample-client",
            "https://via.placeholder.com/256x256/4285f4/ffffff?text=SC",
            "Sample Client Corp",
            "E-commerce",
            "Canada",
        ),
        profile(
            "tech-startup",
            "https://via.placeholder.com/256x256/34a853/ffffff?text=TS",
            "Tech Startup Inc",
            "SaaS Platform",
            "UK",
        ),
    ]
});

fn profile(id: &str, logo: &str, company: &str, business_type: &str, location: &str) -> ClientProfile {
    ClientProfile {
        id: id.to_string(),
        client_logo_url: logo.to_string(),
        company_name: company.to_string(),
        business_type: business_type.to_string(),
        location: location.to_string(),
    }
}

pub fn all_profiles() -> &'static [ClientProfile] {
    &CLIENT_PROFILES
}

pub fn default_profile() -> &'static ClientProfile {
    &CLIENT_PROFILES[0]
}

pub fn find_profile(id: &str) -> Option<&'static ClientProfile> {
    CLIENT_PROFILES.iter().find(|p| p.id == id)
}

/// Looks up a client profile, falling back to the default client.
pub fn profile_for(id: &str) -> &'static ClientProfile {
    find_profile(id).unwrap_or_else(|| {
        debug!("Unknown client id {:?}, using {}", id, DEFAULT_CLIENT_ID);
        default_profile()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(profile_for("tech-startup").company_name, "Tech Startup Inc");
        assert_eq!(profile_for("sample-client").location, "Canada");
    }

    #[test]
    fn unknown_ids_fall_back_to_default() {
        assert_eq!(profile_for("nobody").id, DEFAULT_CLIENT_ID);
        assert_eq!(profile_for("").company_name, "Unitx Lab AI");
        assert!(find_profile("nobody").is_none());
    }

    #[test]
    fn catalog_has_three_clients() {
        assert_eq!(all_profiles().len(), 3);
        assert_eq!(default_profile().id, DEFAULT_CLIENT_ID);
    }
}
