use crate::GreetingStyle;

/// The record a greeting is addressed to.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn greeting(&self, style: GreetingStyle) -> String {
        let Person { name, age } = self;
        match style {
            GreetingStyle::Compatible => format!("Hello Mr. {name} Happy{age}"),
            GreetingStyle::Corrected => format!("Hello Mr. {name} Happy {age}"),
        }
    }
}
