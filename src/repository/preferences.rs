use diesel::prelude::*;

use crate::domain::preferences::{NewPreferences, Preferences};
use crate::models::preferences::{
    NewPreferences as DbNewPreferences, Preferences as DbPreferences,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PreferencesReader, PreferencesWriter};

impl PreferencesReader for DieselRepository {
    fn get_preferences(&self) -> RepositoryResult<Option<Preferences>> {
        use crate::schema::preferences;

        let mut conn = self.conn()?;

        let row = preferences::table
            .order(preferences::id.desc())
            .first::<DbPreferences>(&mut conn)
            .optional()?;

        let row = row.map(TryInto::try_into).transpose()?;
        Ok(row)
    }
}

impl PreferencesWriter for DieselRepository {
    fn update_preferences(&self, preferences: &NewPreferences) -> RepositoryResult<Preferences> {
        use crate::schema::preferences as prefs;

        let mut conn = self.conn()?;
        let db_preferences: DbNewPreferences = preferences.into();

        // Delete and insert in one transaction so the table never holds two rows.
        let stored = conn.transaction(|conn| {
            diesel::delete(prefs::table).execute(conn)?;
            diesel::insert_into(prefs::table)
                .values(&db_preferences)
                .get_result::<DbPreferences>(conn)
        })?;

        let stored: Preferences = stored.try_into()?;
        Ok(stored)
    }
}
