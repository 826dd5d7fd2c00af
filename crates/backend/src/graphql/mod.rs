use std::sync::Arc;

use async_graphql::{Context, Object, SimpleObject};
use poshujan_shared::{
    filter::{self, PostFilter},
    models,
    session::{LoginOutcome, StaticCredentials},
};

use crate::assets::Assets;

// GraphQL output types

#[derive(SimpleObject)]
pub struct GqlDistrict {
    pub name: String,
    pub subdistricts: Vec<String>,
}

#[derive(SimpleObject)]
pub struct GqlPost {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub district: String,
    pub subdistrict: String,
}

impl From<&models::ObservationPost> for GqlPost {
    fn from(p: &models::ObservationPost) -> Self {
        GqlPost {
            name: p.name.clone(),
            lat: p.latitude,
            lng: p.longitude,
            district: p.district.clone(),
            subdistrict: p.subdistrict.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlLoginResult {
    pub ok: bool,
    pub message: String,
}

// Query root

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn districts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<GqlDistrict>> {
        let assets = ctx.data::<Arc<Assets>>()?;
        Ok(assets
            .index
            .districts()
            .iter()
            .map(|d| GqlDistrict {
                name: d.name.clone(),
                subdistricts: d.subdistricts.clone(),
            })
            .collect())
    }

    async fn subdistricts(
        &self,
        ctx: &Context<'_>,
        district: String,
    ) -> async_graphql::Result<Vec<String>> {
        let assets = ctx.data::<Arc<Assets>>()?;
        Ok(assets.index.subdistricts(&district).to_vec())
    }

    async fn posts(
        &self,
        ctx: &Context<'_>,
        district: Option<String>,
        subdistrict: Option<String>,
    ) -> async_graphql::Result<Vec<GqlPost>> {
        let assets = ctx.data::<Arc<Assets>>()?;
        let post_filter = PostFilter::from_options(district, subdistrict);
        Ok(filter::select(&assets.posts, &post_filter)
            .into_iter()
            .map(GqlPost::from)
            .collect())
    }
}

// Mutation root

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> async_graphql::Result<GqlLoginResult> {
        let credentials = ctx.data::<Arc<StaticCredentials>>()?;
        let outcome = credentials.verify(&username, &password);

        match outcome {
            LoginOutcome::Accepted => tracing::info!(username = username.trim(), "Login accepted"),
            _ => tracing::warn!(username = username.trim(), "Login rejected"),
        }

        Ok(GqlLoginResult {
            ok: outcome == LoginOutcome::Accepted,
            message: outcome.message(),
        })
    }
}

pub type Schema = async_graphql::Schema<QueryRoot, MutationRoot, async_graphql::EmptySubscription>;

pub fn build_schema(assets: Arc<Assets>, credentials: Arc<StaticCredentials>) -> Schema {
    async_graphql::Schema::build(QueryRoot, MutationRoot, async_graphql::EmptySubscription)
        .data(assets)
        .data(credentials)
        .finish()
}
