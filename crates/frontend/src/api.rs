use poshujan_shared::models::{AdministrativeIndex, District, ObservationPost};
use poshujan_shared::session::{Credentials, LoginOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

impl<T> GraphQLResponse<T> {
    /// First error wins; a response without data is an error too.
    pub fn into_result(self) -> Result<T, String> {
        if let Some(errors) = self.errors {
            if let Some(first) = errors.into_iter().next() {
                return Err(first.message);
            }
        }
        self.data.ok_or_else(|| "No data returned".to_string())
    }
}

fn api_url() -> Result<String, String> {
    let window = web_sys::window().ok_or("No window")?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| "Page origin unavailable".to_string())?;
    Ok(format!("{}/graphql", origin))
}

async fn query<T: for<'de> Deserialize<'de>>(
    query_str: &str,
    variables: Option<serde_json::Value>,
) -> Result<T, String> {
    let req = GraphQLRequest {
        query: query_str.to_string(),
        variables,
    };

    let resp = reqwest::Client::new()
        .post(api_url()?)
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let gql_resp: GraphQLResponse<T> = resp.json().await.map_err(|e| e.to_string())?;
    gql_resp.into_result()
}

// Types mirroring the GraphQL schema

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistrictData {
    pub name: String,
    pub subdistricts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostData {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub district: String,
    pub subdistrict: String,
}

impl From<PostData> for ObservationPost {
    fn from(p: PostData) -> Self {
        ObservationPost {
            name: p.name,
            latitude: p.lat,
            longitude: p.lng,
            district: p.district,
            subdistrict: p.subdistrict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginData {
    pub ok: bool,
    pub message: String,
}

// API functions

#[derive(Deserialize)]
pub struct CatalogResponse {
    pub districts: Vec<DistrictData>,
    pub posts: Vec<PostData>,
}

impl CatalogResponse {
    pub fn into_models(self) -> (AdministrativeIndex, Vec<ObservationPost>) {
        let index = AdministrativeIndex::new(
            self.districts
                .into_iter()
                .map(|d| District {
                    name: d.name,
                    subdistricts: d.subdistricts,
                })
                .collect(),
        );
        let posts = self.posts.into_iter().map(ObservationPost::from).collect();
        (index, posts)
    }
}

/// Administrative index and every observation post, in one round trip.
pub async fn fetch_catalog() -> Result<(AdministrativeIndex, Vec<ObservationPost>), String> {
    let resp: CatalogResponse = query(
        r#"query { districts { name subdistricts } posts { name lat lng district subdistrict } }"#,
        None,
    )
    .await?;
    Ok(resp.into_models())
}

#[derive(Deserialize)]
pub struct LoginResponse {
    pub login: LoginData,
}

pub fn build_login_variables(credentials: &Credentials) -> serde_json::Value {
    serde_json::json!({
        "username": credentials.username,
        "password": credentials.password,
    })
}

pub async fn login(credentials: &Credentials) -> Result<LoginOutcome, String> {
    let resp: LoginResponse = query(
        r#"mutation Login($username: String!, $password: String!) {
            login(username: $username, password: $password) { ok message }
        }"#,
        Some(build_login_variables(credentials)),
    )
    .await?;
    Ok(LoginOutcome::from_api(resp.login.ok, &resp.login.message))
}

/// Plain GET of a public document, body returned as text.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    resp.text().await.map_err(|e| e.to_string())
}
