use futures::FutureExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use ledgerbase_auth::prelude::*;
use ledgerbase_interceptors::prelude::*;
use ledgerbase_types::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

const SECRET: &str = "interceptor-secret-0123456789-0123456789";
const ISSUER: &str = "https://auth.ledger.test";
const AUDIENCE: &str = "ledger-api";

struct MockReq {
    method: String,
    path: String,
    headers: HashMap<String, String>,
    body: serde_json::Value,
}

struct MockRes {
    status: u16,
    headers: HashMap<String, String>,
    body: Option<serde_json::Value>,
}

#[async_trait::async_trait]
impl ProtoRequest for MockReq {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers.get(name).cloned()
    }

    async fn read_json(&mut self) -> Result<serde_json::Value, InterceptError> {
        Ok(self.body.clone())
    }
}

#[async_trait::async_trait]
impl ProtoResponse for MockRes {
    fn set_status(&mut self, code: u16) {
        self.status = code;
    }

    fn insert_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    async fn write_json(&mut self, body: &serde_json::Value) -> Result<(), InterceptError> {
        self.body = Some(body.clone());
        Ok(())
    }
}

fn mint_token(sub: &str, permissions: &[&str]) -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64;
    let claims = TokenClaims {
        sub: sub.into(),
        email: format!("{sub}@example.com"),
        role: Role::User,
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        session_id: format!("sess_{sub}"),
        iat: now - 60,
        exp: now + 900,
        iss: ISSUER.into(),
        aud: AUDIENCE.into(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode token")
}

fn authenticator() -> Arc<dyn Authenticator> {
    let config = AuthnConfig::new(
        JwtAlgorithm::Hs256,
        Some(SECRET.into()),
        None,
        ISSUER,
        AUDIENCE,
    )
    .expect("valid config");
    Arc::new(JwtAuthenticator::new(&config).expect("authenticator"))
}

fn transfer_policy() -> RoutePolicy {
    RoutePolicy::new(vec![
        RouteRuleSpec {
            when: MatchCond::Http {
                method: "POST".into(),
                path_glob: "/v1/transfers".into(),
            },
            bind: RouteBindingSpec {
                rate_class: RateClass::General,
                required_permission: Some("transfers:write".into()),
                owner_source: Some(OwnerSource::BodyField("account_owner".into())),
                action: Some(GateAction::Transfer),
                amount_from_body: true,
            },
        },
        RouteRuleSpec {
            when: MatchCond::Http {
                method: "POST".into(),
                path_glob: "/v1/auth/login".into(),
            },
            bind: RouteBindingSpec {
                rate_class: RateClass::Auth,
                required_permission: None,
                owner_source: None,
                action: None,
                amount_from_body: false,
            },
        },
        RouteRuleSpec {
            when: MatchCond::Http {
                method: "POST".into(),
                path_glob: "/v1/defi/invest".into(),
            },
            bind: RouteBindingSpec {
                rate_class: RateClass::General,
                required_permission: None,
                owner_source: None,
                action: Some(GateAction::DefiInvest),
                amount_from_body: true,
            },
        },
    ])
}

fn chain_with(
    store: Arc<dyn RateLimitStore>,
    auth_policy: RateLimitPolicy,
    directory: MemoryTierDirectory,
) -> InterceptorChain {
    InterceptorChain::new(vec![
        Box::new(ContextInitStage),
        Box::new(RoutePolicyStage {
            policy: transfer_policy(),
        }),
        Box::new(RateLimitStage {
            store,
            auth_policy,
            general_policy: RateLimitPolicy::general_api(),
        }),
        Box::new(AuthnMapStage {
            authenticator: authenticator(),
        }),
        Box::new(ResourceGuardStage),
        Box::new(TierGateStage {
            gate: Arc::new(TierGate::new(Arc::new(directory))),
        }),
        Box::new(ResponseStampStage),
    ])
}

fn default_chain(directory: MemoryTierDirectory) -> InterceptorChain {
    chain_with(
        Arc::new(MemoryRateLimitStore::new()),
        RateLimitPolicy::auth_endpoints(),
        directory,
    )
}

fn transfer_req(token: Option<&str>, owner: &str, amount_cents: u64) -> MockReq {
    let mut headers: HashMap<String, String> =
        [("x-forwarded-for".into(), "203.0.113.9".into())].into();
    if let Some(token) = token {
        headers.insert("Authorization".into(), format!("Bearer {token}"));
    }
    MockReq {
        method: "POST".into(),
        path: "/v1/transfers".into(),
        headers,
        body: serde_json::json!({
            "account_owner": owner,
            "amount": amount_cents,
        }),
    }
}

fn empty_res() -> MockRes {
    MockRes {
        status: 0,
        headers: HashMap::new(),
        body: None,
    }
}

async fn run(chain: &InterceptorChain, req: &mut MockReq, res: &mut MockRes) -> Result<(), InterceptError> {
    chain
        .run_with_handler(InterceptContext::default(), req, res, |_, _| {
            async move { Ok(serde_json::json!({"ok": true})) }.boxed()
        })
        .await
}

#[tokio::test]
async fn pipeline_allows_a_fully_entitled_request() {
    let directory = MemoryTierDirectory::new()
        .with_tier(PrincipalId("user_1".into()), KycTier::Tier1);
    let chain = default_chain(directory);

    let token = mint_token("user_1", &["transfers:write"]);
    let mut req = transfer_req(Some(&token), "user_1", 50_000);
    let mut res = empty_res();

    run(&chain, &mut req, &mut res).await.expect("request passes");
    assert_eq!(res.status, 200);
    assert!(res.headers.contains_key("X-Request-Id"));
    assert_eq!(res.body.as_ref().unwrap()["ok"], true);
}

#[tokio::test]
async fn missing_credential_maps_to_missing_token() {
    let chain = default_chain(MemoryTierDirectory::new());
    let mut req = transfer_req(None, "user_1", 1_000);
    let mut res = empty_res();

    let err = run(&chain, &mut req, &mut res).await.expect_err("must deny");
    assert_eq!(err.0.code.0, "AUTH.MISSING_TOKEN");
    assert_eq!(err.0.http_status, 401);
}

#[tokio::test]
async fn session_cookie_is_a_credential_fallback() {
    let directory = MemoryTierDirectory::new()
        .with_tier(PrincipalId("user_1".into()), KycTier::Tier1);
    let chain = default_chain(directory);

    let token = mint_token("user_1", &["transfers:write"]);
    let mut req = transfer_req(None, "user_1", 50_000);
    req.headers.insert(
        "Cookie".into(),
        format!("theme=dark; {SESSION_COOKIE}={token}"),
    );
    let mut res = empty_res();

    run(&chain, &mut req, &mut res).await.expect("request passes");
    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn foreign_resource_is_denied_independent_of_tier() {
    // Even at the top tier the ownership guard rejects first.
    let directory = MemoryTierDirectory::new()
        .with_tier(PrincipalId("user_1".into()), KycTier::Tier3);
    let chain = default_chain(directory);

    let token = mint_token("user_1", &["transfers:write"]);
    let mut req = transfer_req(Some(&token), "user_2", 1_000);
    let mut res = empty_res();

    let err = run(&chain, &mut req, &mut res).await.expect_err("must deny");
    assert_eq!(err.0.code.0, "AUTH.PERMISSION_DENIED");
    assert_eq!(err.0.http_status, 403);
}

#[tokio::test]
async fn insufficient_tier_carries_the_suggested_upgrade() {
    let chain = default_chain(MemoryTierDirectory::new());

    let token = mint_token("user_1", &[]);
    let mut req = MockReq {
        method: "POST".into(),
        path: "/v1/defi/invest".into(),
        headers: [
            ("Authorization".into(), format!("Bearer {token}")),
            ("x-forwarded-for".into(), "203.0.113.9".into()),
        ]
        .into(),
        body: serde_json::json!({"amount": 100}),
    };
    let mut res = empty_res();

    let err = run(&chain, &mut req, &mut res).await.expect_err("must deny");
    assert_eq!(err.0.code.0, "KYC.TIER_INSUFFICIENT");
    assert_eq!(
        err.0.meta.get("suggested_tier").unwrap(),
        &serde_json::json!("tier_2")
    );
}

#[tokio::test]
async fn auth_routes_rate_limit_before_any_token_verification() {
    let chain = chain_with(
        Arc::new(MemoryRateLimitStore::new()),
        RateLimitPolicy {
            window_ms: 60_000,
            max_requests: 1,
        },
        MemoryTierDirectory::new(),
    );

    let login = || MockReq {
        method: "POST".into(),
        path: "/v1/auth/login".into(),
        headers: [
            ("x-forwarded-for".into(), "198.51.100.7".into()),
            // Garbage credential: if token verification ran first this
            // would be a 401, not a 429.
            ("Authorization".into(), "Bearer not-a-jwt".into()),
        ]
        .into(),
        body: serde_json::json!({}),
    };

    let mut res = empty_res();
    let err = run(&chain, &mut login(), &mut res).await.expect_err("bad token");
    assert_eq!(err.0.code.0, "AUTH.TOKEN_INVALID");

    let mut res = empty_res();
    run(&chain, &mut login(), &mut res).await.expect("written 429");
    assert_eq!(res.status, 429);
    assert!(res.headers.contains_key("Retry-After"));
    assert_eq!(res.body.as_ref().unwrap()["code"], "QUOTA.RATE_LIMITED");
}

struct FailingRateLimitStore;

#[async_trait::async_trait]
impl RateLimitStore for FailingRateLimitStore {
    async fn check_and_consume(
        &self,
        _key: &str,
        _policy: &RateLimitPolicy,
        _now: Timestamp,
    ) -> Result<RateDecision, AuthError> {
        Err(errors::store_unavailable("simulated outage"))
    }
}

#[tokio::test]
async fn broken_rate_limit_store_fails_open() {
    let directory = MemoryTierDirectory::new()
        .with_tier(PrincipalId("user_1".into()), KycTier::Tier1);
    let chain = chain_with(
        Arc::new(FailingRateLimitStore),
        RateLimitPolicy::auth_endpoints(),
        directory,
    );

    let token = mint_token("user_1", &["transfers:write"]);
    let mut req = transfer_req(Some(&token), "user_1", 50_000);
    let mut res = empty_res();

    run(&chain, &mut req, &mut res).await.expect("admitted");
    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn undeclared_routes_are_denied() {
    let chain = default_chain(MemoryTierDirectory::new());
    let mut req = MockReq {
        method: "DELETE".into(),
        path: "/v1/unknown".into(),
        headers: HashMap::new(),
        body: serde_json::json!({}),
    };
    let mut res = empty_res();

    let err = run(&chain, &mut req, &mut res).await.expect_err("must deny");
    assert_eq!(err.0.code.0, "AUTH.PERMISSION_DENIED");
}
