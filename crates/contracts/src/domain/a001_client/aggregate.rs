use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
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

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент (контрагент-покупатель)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate<ClientId>,

    // Специфичные поля агрегата
    #[serde(rename = "fullName")]
    pub full_name: String,

    pub inn: String,
    pub email: String,
    pub phone: String,

    /// Статус: "active" | "archived"
    pub status: String,
}

impl Client {
    /// Создать нового клиента для вставки
    pub fn new_for_insert(
        code: String,
        description: String,
        full_name: String,
        inn: String,
        email: String,
        phone: String,
    ) -> Self {
        let base = BaseAggregate::new(ClientId::new_v4(), code, description);

        Self {
            base,
            full_name,
            inn,
            email,
            phone,
            status: "active".to_string(),
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ClientDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.full_name = dto.full_name.clone();
        self.inn = dto.inn.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.status = dto.status.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }

        // Валидация ИНН (разрешаем пустой для импорта из внешних систем)
        if !self.inn.trim().is_empty() {
            let inn_digits: String = self.inn.chars().filter(|c| c.is_ascii_digit()).collect();
            if inn_digits.len() != 10 && inn_digits.len() != 12 {
                return Err("ИНН должен содержать 10 цифр (для ЮЛ) или 12 цифр (для ИП)".into());
            }
        }

        Ok(())
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Клиент"
    }

    fn list_name() -> &'static str {
        "Клиенты"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления клиента
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub inn: String,
    pub email: String,
    pub phone: String,
    pub status: String,
}
