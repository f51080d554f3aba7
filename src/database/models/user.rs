use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub licence_number: String,
    pub wallet_balance: i64,
    pub country: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
    pub house_number: String,
    #[serde(default)]
    pub apartment_number: Option<String>,
    pub phone_number: String,
}

/// Partial update for a user; only supplied fields are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    pub licence_number: Option<String>,
    pub wallet_balance: Option<i64>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub house_number: Option<String>,
    pub apartment_number: Option<String>,
    pub phone_number: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == UserPatch::default()
    }

    /// Writes supplied fields into `user`, returning whether anything changed
    pub fn apply_to(&self, user: &mut User) -> bool {
        let mut changed = false;

        fn set<T: PartialEq + Clone>(target: &mut T, value: &Option<T>, changed: &mut bool) {
            if let Some(v) = value {
                if target != v {
                    *target = v.clone();
                    *changed = true;
                }
            }
        }

        set(&mut user.licence_number, &self.licence_number, &mut changed);
        set(&mut user.wallet_balance, &self.wallet_balance, &mut changed);
        set(&mut user.country, &self.country, &mut changed);
        set(&mut user.city, &self.city, &mut changed);
        set(&mut user.street, &self.street, &mut changed);
        set(&mut user.postal_code, &self.postal_code, &mut changed);
        set(&mut user.house_number, &self.house_number, &mut changed);
        set(&mut user.phone_number, &self.phone_number, &mut changed);

        if let Some(apartment) = &self.apartment_number {
            if user.apartment_number.as_ref() != Some(apartment) {
                user.apartment_number = Some(apartment.clone());
                changed = true;
            }
        }

        changed
    }
}
