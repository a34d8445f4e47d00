//! Fixtures shared by the gateway's unit tests.

use motorspeed_chat::Responder;
use motorspeed_core::FEATURE_NAMES;
use motorspeed_inference::{
    InferenceAdapter, RandomForest, RandomForestParams, StandardScaler, StandardScalerParams,
    TreeParams,
};

use crate::auth::CredentialTable;
use crate::server::GatewayState;
use crate::session::{ActionContext, SessionId, UserAction};
use crate::session_registry::SessionRegistry;

/// An adapter whose forest predicts [`TestDeps::PREDICTION`] for every row.
pub fn constant_adapter(value: f64) -> InferenceAdapter {
    let scaler = StandardScaler::from_params(StandardScalerParams {
        feature_names_in: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
        mean: None,
        scale: None,
    })
    .unwrap();
    let model = RandomForest::from_params(RandomForestParams {
        n_features_in: FEATURE_NAMES.len(),
        trees: vec![TreeParams {
            children_left: vec![-1],
            children_right: vec![-1],
            feature: vec![-2],
            threshold: vec![-2.0],
            value: vec![value],
        }],
    })
    .unwrap();
    InferenceAdapter::from_parts(scaler, model).unwrap()
}

pub struct TestDeps {
    pub credentials: CredentialTable,
    pub adapter: InferenceAdapter,
    pub responder: Responder,
}

impl TestDeps {
    pub const PREDICTION: f64 = 1234.567891;

    pub fn new() -> Self {
        Self {
            credentials: CredentialTable::default(),
            adapter: constant_adapter(Self::PREDICTION),
            responder: Responder::default(),
        }
    }

    pub fn context(&self) -> ActionContext<'_> {
        ActionContext {
            credentials: &self.credentials,
            adapter: &self.adapter,
            responder: &self.responder,
        }
    }
}

pub fn test_state() -> GatewayState {
    GatewayState::new(constant_adapter(TestDeps::PREDICTION), "motorspeed_session")
}

/// Log `admin` into a fresh session and return its id.
pub async fn logged_in_session(registry: &SessionRegistry) -> SessionId {
    let deps = TestDeps::new();
    let access = registry
        .with_session(None, |s| {
            s.apply(
                UserAction::Login {
                    username: "admin".into(),
                    password: "password123".into(),
                },
                &deps.context(),
            )
        })
        .await;
    assert!(access.issued);
    access.id
}
