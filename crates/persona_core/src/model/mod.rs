mod brief;
mod ids;
mod mix;
mod persona;

pub use brief::{BriefStatus, CopyVariations, CreativeBrief, MessagingAngle, SuccessMetrics};
pub use ids::PersonaId;
pub use mix::TargetMix;
pub use persona::{
    AcquisitionPoint, PersonaDetails, PersonaRecord, PersonaRecordBuilder, Qualitative, WordWeight,
    ensure_unique_ids,
};
