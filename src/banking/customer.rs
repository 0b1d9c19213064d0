use getset::{CopyGetters, Getters};

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Customer {
    #[getset(get_copy = "pub")]
    number: u32,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    age: u32,
    #[getset(get = "pub")]
    city: String,
    /// Number of the single account this customer holds.
    #[getset(get = "pub")]
    account_number: String,
}

impl Customer {
    pub fn new(number: u32, name: String, age: u32, city: String, account_number: String) -> Customer {
        Customer {
            number,
            name,
            age,
            city,
            account_number,
        }
    }
}
