use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// `{"message": ...}` acknowledgement body.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}
