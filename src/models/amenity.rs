//! Amenity flags model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    NursingRoom,
    DiaperSpace,
    KidsSpace,
    StrollerSpace,
    Sink,
    DiaperTrash,
}

impl Amenity {
    pub const ALL: [Amenity; 6] = [
        Amenity::NursingRoom,
        Amenity::DiaperSpace,
        Amenity::KidsSpace,
        Amenity::StrollerSpace,
        Amenity::Sink,
        Amenity::DiaperTrash,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::NursingRoom => "授乳室",
            Amenity::DiaperSpace => "おむつ替えスペース",
            Amenity::KidsSpace => "キッズスペース",
            Amenity::StrollerSpace => "ベビーカー置き場",
            Amenity::Sink => "洗面台",
            Amenity::DiaperTrash => "おむつ用ゴミ箱",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Amenity::NursingRoom => "#ff6b9d",
            Amenity::DiaperSpace => "#4ecdc4",
            Amenity::KidsSpace => "#45b7d1",
            Amenity::StrollerSpace => "#96ceb4",
            Amenity::Sink => "#feca57",
            Amenity::DiaperTrash => "#ff9ff3",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Amenity::NursingRoom => "プライベートな授乳スペース",
            Amenity::DiaperSpace => "おむつ交換用の設備",
            Amenity::KidsSpace => "子供が遊べる専用エリア",
            Amenity::StrollerSpace => "ベビーカーを安全に置ける場所",
            Amenity::Sink => "手洗いや清潔維持のための設備",
            Amenity::DiaperTrash => "おむつ専用の廃棄場所",
        }
    }
}

/// The six facility flags of a venue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenitySet {
    pub has_nursing_room: bool,
    pub has_diaper_space: bool,
    pub has_stroller_space: bool,
    pub has_kids_space: bool,
    pub has_sink: bool,
    pub has_diaper_trash: bool,
}

impl AmenitySet {
    pub fn has(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::NursingRoom => self.has_nursing_room,
            Amenity::DiaperSpace => self.has_diaper_space,
            Amenity::KidsSpace => self.has_kids_space,
            Amenity::StrollerSpace => self.has_stroller_space,
            Amenity::Sink => self.has_sink,
            Amenity::DiaperTrash => self.has_diaper_trash,
        }
    }

    pub fn set(&mut self, amenity: Amenity, value: bool) {
        let flag = match amenity {
            Amenity::NursingRoom => &mut self.has_nursing_room,
            Amenity::DiaperSpace => &mut self.has_diaper_space,
            Amenity::KidsSpace => &mut self.has_kids_space,
            Amenity::StrollerSpace => &mut self.has_stroller_space,
            Amenity::Sink => &mut self.has_sink,
            Amenity::DiaperTrash => &mut self.has_diaper_trash,
        };
        *flag = value;
    }

    /// Amenities present, in display order
    pub fn available(&self) -> Vec<Amenity> {
        Amenity::ALL.iter().copied().filter(|a| self.has(*a)).collect()
    }
}
