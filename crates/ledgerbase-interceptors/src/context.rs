use async_trait::async_trait;
use http::Extensions;
use ledgerbase_auth::prelude::Credential;
use ledgerbase_types::prelude::AuthenticatedPrincipal;

use crate::policy::model::RouteBindingSpec;

#[derive(Debug, Default)]
pub struct InterceptContext {
    pub request_id: String,
    pub correlation_id: Option<String>,
    /// Best-effort client address: first `x-forwarded-for` hop, then
    /// `x-real-ip`. Absent when neither header is present.
    pub client_ip: Option<String>,
    pub credential: Option<Credential>,
    pub principal: Option<AuthenticatedPrincipal>,
    pub route: Option<RouteBindingSpec>,
    pub extensions: Extensions,
}

#[async_trait]
pub trait ProtoRequest: Send {
    fn method(&self) -> &str;
    fn path(&self) -> &str;
    fn header(&self, name: &str) -> Option<String>;
    async fn read_json(&mut self) -> Result<serde_json::Value, crate::errors::InterceptError>;
}

#[async_trait]
pub trait ProtoResponse: Send {
    fn set_status(&mut self, code: u16);
    fn insert_header(&mut self, name: &str, value: &str);
    async fn write_json(
        &mut self,
        body: &serde_json::Value,
    ) -> Result<(), crate::errors::InterceptError>;
}
