//! Recording mocks shared by the payment handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId};
use crate::domain::payment::{Payment, PaymentAttributes, PaymentMethod, PaymentStatus};
use crate::ports::{
    CreatePreferenceRequest, GatewayError, PaymentFilter, PaymentGateway, PaymentRepository,
    Preference,
};

/// Ordered log of port calls, shared between mocks of one test.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

// ════════════════════════════════════════════════════════════════════════════
// Repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockPaymentRepository {
    payments: Mutex<Vec<Payment>>,
    saved: Mutex<Vec<Payment>>,
    updated: Mutex<Vec<Payment>>,
    filters: Mutex<Vec<PaymentFilter>>,
    log: CallLog,
    fail_with: Option<DomainError>,
}

impl MockPaymentRepository {
    pub fn new(log: CallLog) -> Self {
        Self {
            payments: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            filters: Mutex::new(Vec::new()),
            log,
            fail_with: None,
        }
    }

    pub fn with_payments(log: CallLog, payments: Vec<Payment>) -> Self {
        let repo = Self::new(log);
        *repo.payments.lock().unwrap() = payments;
        repo
    }

    pub fn failing(log: CallLog) -> Self {
        let mut repo = Self::new(log);
        repo.fail_with = Some(DomainError::new(
            ErrorCode::DatabaseError,
            "Simulated connection failure",
        ));
        repo
    }

    pub fn saved(&self) -> Vec<Payment> {
        self.saved.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<Payment> {
        self.updated.lock().unwrap().clone()
    }

    pub fn filters(&self) -> Vec<PaymentFilter> {
        self.filters.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentRepository for MockPaymentRepository {
    async fn save(&self, payment: &Payment) -> Result<Payment, DomainError> {
        self.log.lock().unwrap().push("save");
        self.check_failure()?;
        self.saved.lock().unwrap().push(payment.clone());
        self.payments.lock().unwrap().push(payment.clone());
        Ok(payment.clone())
    }

    async fn update(&self, payment: &Payment) -> Result<Payment, DomainError> {
        self.log.lock().unwrap().push("update");
        self.check_failure()?;
        self.updated.lock().unwrap().push(payment.clone());
        Ok(payment.clone())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        self.log.lock().unwrap().push("find_by_id");
        self.check_failure()?;
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn find_all(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, DomainError> {
        self.log.lock().unwrap().push("find_all");
        self.check_failure()?;
        self.filters.lock().unwrap().push(filter.clone());
        Ok(self.payments.lock().unwrap().clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Gateway
// ════════════════════════════════════════════════════════════════════════════

pub struct RecordingGateway {
    requests: Mutex<Vec<CreatePreferenceRequest>>,
    log: CallLog,
    fail_with: Option<GatewayError>,
}

impl RecordingGateway {
    pub fn new(log: CallLog) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            log,
            fail_with: None,
        }
    }

    pub fn failing(log: CallLog, error: GatewayError) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            log,
            fail_with: Some(error),
        }
    }

    pub fn requests(&self) -> Vec<CreatePreferenceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_preference(
        &self,
        request: CreatePreferenceRequest,
    ) -> Result<Preference, GatewayError> {
        self.log.lock().unwrap().push("create_preference");
        self.requests.lock().unwrap().push(request);
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        Ok(Preference {
            id: "pref-123".to_string(),
            init_point: "https://checkout.example/pref-123".to_string(),
            status: None,
        })
    }

    async fn get_payment_status(&self, _payment_id: &str) -> Result<String, GatewayError> {
        self.log.lock().unwrap().push("get_payment_status");
        Ok("approved".to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Fixtures
// ════════════════════════════════════════════════════════════════════════════

pub fn stored_payment(cpf: &str, method: PaymentMethod) -> Payment {
    Payment::create(PaymentAttributes {
        cpf: cpf.to_string(),
        description: "Stored payment".to_string(),
        amount: Decimal::new(25050, 2),
        payment_method: method,
        status: PaymentStatus::Pending,
        external_id: None,
    })
}
