//! Database model for key-value slots.

use diesel::prelude::*;

/// Database model for a single named slot
#[derive(Queryable, Insertable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::kv_slots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct KvSlotDB {
    pub slot_key: String,
    pub slot_value: String,
}
