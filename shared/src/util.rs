/// Current UTC time, used to stamp new sales
pub fn now() -> crate::types::Timestamp {
    chrono::Utc::now()
}
