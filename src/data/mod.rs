pub mod flea_ban;
pub mod handbook;
pub mod hideout;
pub mod ids;
pub mod item_def;
pub mod quest;
pub mod snapshot;
pub mod trader;

pub use flea_ban::is_flea_banned;
pub use handbook::{Handbook, HandbookEntry};
pub use hideout::{HideoutArea, HideoutProduction, HideoutProductionData, HideoutSettings, ProductionRequirement, Stage, StageRequirement};
pub use item_def::{ItemProps, ItemTemplate};
pub use quest::{Quest, QuestCondition, QuestReward, RewardItem, TargetList};
pub use snapshot::{ArmorMaterial, DatabaseSnapshot};
pub use trader::{Assort, AssortItem, BarterScheme, BuyFilter, LoyaltyLevel, Trader, TraderBase};
