#[derive(Clone, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Fixture {
    Gettysburg,
}

impl Fixture {
    pub fn script(&self) -> &'static str {
        match self {
            Self::Gettysburg => cue_data::gettysburg::SCRIPT,
        }
    }

    pub fn events_json(&self) -> &'static str {
        match self {
            Self::Gettysburg => cue_data::gettysburg::EVENTS_JSON,
        }
    }
}
