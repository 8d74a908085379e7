// 手役テンプレート (組み合わせの列挙と手牌の判定)
mod count;
mod even_pungs;
mod kong_kong_pair;
mod pungs_369;
mod query;
mod registry;
mod sample;
mod sequence_and_kongs;
mod symmetrical_13579;
mod template;

use crate::model::*;

use count::*;

pub use count::{SuitRow, TileCounter};
pub use even_pungs::EvenPungsFlowers;
pub use kong_kong_pair::KongKongPair;
pub use pungs_369::Pungs369;
pub use query::{Analysis, TemplateSummary};
pub use registry::{default_registry, TemplateRegistry, TemplateRegistryBuilder};
pub use sample::sample_hand;
pub use sequence_and_kongs::SequenceAndKongs;
pub use symmetrical_13579::Symmetrical13579;
pub use template::{flatten, HandTemplate, TemplateInfo, Variation};
