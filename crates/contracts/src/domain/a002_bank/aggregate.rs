use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор банка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankId(pub Uuid);

impl BankId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for BankId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BankId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Банк (справочник БИК)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bank {
    #[serde(flatten)]
    pub base: BaseAggregate<BankId>,

    /// БИК — 9 цифр
    pub bic: String,

    /// Корреспондентский счёт
    #[serde(rename = "corrAccount")]
    pub corr_account: String,

    pub city: String,
}

impl Bank {
    pub fn new_for_insert(
        code: String,
        description: String,
        bic: String,
        corr_account: String,
        city: String,
    ) -> Self {
        let base = BaseAggregate::new(BankId::new_v4(), code, description);

        Self {
            base,
            bic,
            corr_account,
            city,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &BankDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.bic = dto.bic.clone();
        self.corr_account = dto.corr_account.clone();
        self.city = dto.city.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }

        let bic_digits: String = self.bic.chars().filter(|c| c.is_ascii_digit()).collect();
        if bic_digits.len() != 9 {
            return Err("БИК должен содержать 9 цифр".into());
        }

        Ok(())
    }
}

impl AggregateRoot for Bank {
    type Id = BankId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "bank"
    }

    fn element_name() -> &'static str {
        "Банк"
    }

    fn list_name() -> &'static str {
        "Банки"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления банка
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BankDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub bic: String,

    #[serde(rename = "corrAccount")]
    pub corr_account: String,

    pub city: String,
}
