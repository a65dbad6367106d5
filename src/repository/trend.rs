use diesel::prelude::*;

use crate::domain::trend::{FashionTrend, NewFashionTrend};
use crate::domain::types::TrendId;
use crate::models::trend::{FashionTrend as DbTrend, NewFashionTrend as DbNewTrend};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TrendListQuery, TrendReader, TrendWriter};

impl TrendReader for DieselRepository {
    fn list_trends(&self, query: TrendListQuery) -> RepositoryResult<Vec<FashionTrend>> {
        use crate::schema::fashion_trends;

        let mut conn = self.conn()?;

        let items = fashion_trends::table
            .filter(fashion_trends::valid_from.le(query.window.end))
            .filter(fashion_trends::valid_to.ge(query.window.start))
            .order((fashion_trends::valid_from.desc(), fashion_trends::id.desc()))
            .load::<DbTrend>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<FashionTrend>, _>>()?;

        Ok(items)
    }
}

impl TrendWriter for DieselRepository {
    fn create_trends(&self, trends: &[NewFashionTrend]) -> RepositoryResult<Vec<FashionTrend>> {
        use crate::schema::fashion_trends;

        let mut conn = self.conn()?;

        let rows = conn.transaction(|conn| {
            trends
                .iter()
                .map(|trend| {
                    diesel::insert_into(fashion_trends::table)
                        .values(DbNewTrend::from(trend))
                        .get_result::<DbTrend>(conn)
                })
                .collect::<Result<Vec<_>, diesel::result::Error>>()
        })?;

        let stored = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<FashionTrend>, _>>()?;
        Ok(stored)
    }

    fn delete_trend(&self, id: TrendId) -> RepositoryResult<usize> {
        use crate::schema::fashion_trends;

        let mut conn = self.conn()?;

        let affected = diesel::delete(fashion_trends::table.filter(fashion_trends::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
