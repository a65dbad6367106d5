use crate::domain::preferences::{NewPreferences, Preferences};
use crate::repository::{PreferencesReader, PreferencesWriter};

use super::{ServiceError, ServiceResult};

pub fn get_preferences<R>(repo: &R) -> ServiceResult<Option<Preferences>>
where
    R: PreferencesReader,
{
    repo.get_preferences().map_err(|e| {
        log::error!("Failed to get preferences: {e}");
        ServiceError::Internal
    })
}

/// Replace the stored preferences.
pub fn update_preferences<R>(preferences: NewPreferences, repo: &R) -> ServiceResult<Preferences>
where
    R: PreferencesWriter,
{
    repo.update_preferences(&preferences).map_err(|e| {
        log::error!("Failed to update preferences: {e}");
        ServiceError::Internal
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::types::{ColorPreference, StylePreference};
    use crate::repository::test::TestRepository;

    #[test]
    fn starts_empty() {
        let repo = TestRepository::new();
        assert_eq!(get_preferences(&repo), Ok(None));
    }

    #[test]
    fn update_replaces_previous_preferences() {
        let repo = TestRepository::new();
        update_preferences(
            NewPreferences {
                style_preferences: BTreeSet::from([StylePreference::Casual]),
                color_preferences: BTreeSet::from([ColorPreference::Warm]),
            },
            &repo,
        )
        .unwrap();
        let latest = update_preferences(
            NewPreferences {
                style_preferences: BTreeSet::from([StylePreference::Formal]),
                color_preferences: BTreeSet::new(),
            },
            &repo,
        )
        .unwrap();

        assert_eq!(get_preferences(&repo), Ok(Some(latest.clone())));
        assert!(latest.style_preferences.contains(&StylePreference::Formal));
        assert!(latest.color_preferences.is_empty());
    }
}
