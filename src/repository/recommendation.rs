use diesel::prelude::*;

use crate::domain::recommendation::{NewProductRecommendation, ProductRecommendation};
use crate::domain::types::RecommendationId;
use crate::models::recommendation::{
    NewProductRecommendation as DbNewRecommendation, ProductRecommendation as DbRecommendation,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, RecommendationReader, RecommendationWriter};

impl RecommendationReader for DieselRepository {
    fn list_recommendations(&self) -> RepositoryResult<Vec<ProductRecommendation>> {
        use crate::schema::product_recommendations;

        let mut conn = self.conn()?;

        let items = product_recommendations::table
            .order((
                product_recommendations::created_at.desc(),
                product_recommendations::id.desc(),
            ))
            .load::<DbRecommendation>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ProductRecommendation>, _>>()?;

        Ok(items)
    }
}

impl RecommendationWriter for DieselRepository {
    fn create_recommendations(
        &self,
        recommendations: &[NewProductRecommendation],
    ) -> RepositoryResult<Vec<ProductRecommendation>> {
        use crate::schema::product_recommendations;

        let mut conn = self.conn()?;

        let rows = conn.transaction(|conn| {
            recommendations
                .iter()
                .map(|recommendation| {
                    diesel::insert_into(product_recommendations::table)
                        .values(DbNewRecommendation::from(recommendation))
                        .get_result::<DbRecommendation>(conn)
                })
                .collect::<Result<Vec<_>, diesel::result::Error>>()
        })?;

        let stored = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ProductRecommendation>, _>>()?;
        Ok(stored)
    }

    fn delete_recommendation(&self, id: RecommendationId) -> RepositoryResult<usize> {
        use crate::schema::product_recommendations;

        let mut conn = self.conn()?;

        let affected = diesel::delete(
            product_recommendations::table.filter(product_recommendations::id.eq(id.get())),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }
}
