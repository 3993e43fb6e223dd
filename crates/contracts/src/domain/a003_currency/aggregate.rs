use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор валюты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyId(pub Uuid);

impl CurrencyId {
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

impl AggregateId for CurrencyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CurrencyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Валюта (справочник ISO 4217)
///
/// В `base.code` лежит буквенный код ("RUB", "USD"), в `description` —
/// название для списков.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    #[serde(flatten)]
    pub base: BaseAggregate<CurrencyId>,

    /// Числовой код ISO 4217 ("643")
    #[serde(rename = "numCode")]
    pub num_code: String,

    /// Символ для отображения ("₽")
    pub symbol: String,
}

impl Currency {
    pub fn new_for_insert(
        code: String,
        description: String,
        num_code: String,
        symbol: String,
    ) -> Self {
        let base = BaseAggregate::new(CurrencyId::new_v4(), code, description);

        Self {
            base,
            num_code,
            symbol,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Буквенный код не может быть пустым".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }

        Ok(())
    }
}

impl AggregateRoot for Currency {
    type Id = CurrencyId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "currency"
    }

    fn element_name() -> &'static str {
        "Валюта"
    }

    fn list_name() -> &'static str {
        "Валюты"
    }
}
