use ulid::Ulid;

pub fn new_id() -> String {
  Ulid::new().to_string()
}
