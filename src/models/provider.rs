use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Provider snapshot embedded in availability and appointment records.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProviderSummary {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl From<&Provider> for ProviderSummary {
    fn from(provider: &Provider) -> Self {
        ProviderSummary {
            id: provider.id.clone(),
            name: provider.name.clone(),
            specialty: provider.specialty.clone(),
        }
    }
}

static PROVIDERS: Lazy<Vec<Provider>> = Lazy::new(|| {
    vec![
        Provider {
            id: "provider-1".to_string(),
            name: "Dr. Sarah Chen".to_string(),
            specialty: "Family Medicine".to_string(),
            bio: Some(
                "Dr. Chen has over 15 years of experience in family medicine and preventive care."
                    .to_string(),
            ),
        },
        Provider {
            id: "provider-2".to_string(),
            name: "Dr. James Kumar".to_string(),
            specialty: "Internal Medicine".to_string(),
            bio: Some(
                "Dr. Kumar specializes in internal medicine with a focus on chronic disease management."
                    .to_string(),
            ),
        },
    ]
});

pub fn all_providers() -> &'static [Provider] {
    &PROVIDERS
}

pub fn find_provider(provider_id: &str) -> Option<&'static Provider> {
    PROVIDERS.iter().find(|provider| provider.id == provider_id)
}
