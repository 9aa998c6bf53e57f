//! Quader-Datenmodell: Vorder-/Rückfläche, Ecken-Identitäten und Host-Schema.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ecke einer rechteckigen Fläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    /// Oben links
    Tl,
    /// Oben rechts
    Tr,
    /// Unten links
    Bl,
    /// Unten rechts
    Br,
}

impl Corner {
    /// Alle Ecken in fester Reihenfolge (Index-Korrespondenz Vorder-/Rückfläche).
    pub const ALL: [Corner; 4] = [Corner::Tl, Corner::Tr, Corner::Bl, Corner::Br];
}

/// Fläche eines Quaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Vorderfläche (zuerst gezeichnet)
    Front,
    /// Rückfläche (per Tiefen-Drag konstruiert)
    Back,
}

/// Eindeutige Adresse eines Eckpunkts innerhalb eines Quaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CornerId {
    pub face: Face,
    pub corner: Corner,
}

impl CornerId {
    pub const fn new(face: Face, corner: Corner) -> Self {
        Self { face, corner }
    }

    pub const fn front(corner: Corner) -> Self {
        Self::new(Face::Front, corner)
    }

    pub const fn back(corner: Corner) -> Self {
        Self::new(Face::Back, corner)
    }
}

/// Vier Eckpunkte einer Fläche (Bildkoordinaten).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneQuad {
    #[serde(with = "point_serde")]
    pub tl: Vec2,
    #[serde(with = "point_serde")]
    pub tr: Vec2,
    #[serde(with = "point_serde")]
    pub bl: Vec2,
    #[serde(with = "point_serde")]
    pub br: Vec2,
}

impl PlaneQuad {
    /// Fläche mit allen vier Ecken auf demselben Punkt.
    pub fn collapsed(point: Vec2) -> Self {
        Self {
            tl: point,
            tr: point,
            bl: point,
            br: point,
        }
    }

    /// Achsparalleles Rechteck zwischen zwei beliebigen Eckpunkten.
    ///
    /// `tl` ist immer das geometrische Minimum, `br` das Maximum.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            tl: min,
            tr: Vec2::new(max.x, min.y),
            bl: Vec2::new(min.x, max.y),
            br: max,
        }
    }

    pub fn get(&self, corner: Corner) -> Vec2 {
        match corner {
            Corner::Tl => self.tl,
            Corner::Tr => self.tr,
            Corner::Bl => self.bl,
            Corner::Br => self.br,
        }
    }

    pub fn get_mut(&mut self, corner: Corner) -> &mut Vec2 {
        match corner {
            Corner::Tl => &mut self.tl,
            Corner::Tr => &mut self.tr,
            Corner::Bl => &mut self.bl,
            Corner::Br => &mut self.br,
        }
    }

    /// Breite entlang der unteren Kante (`br.x - bl.x`).
    pub fn width(&self) -> f32 {
        self.br.x - self.bl.x
    }

    /// Höhe entlang der rechten Kante (`br.y - tr.y`).
    pub fn height(&self) -> f32 {
        self.br.y - self.tr.y
    }

    /// Eckpunkte in Umlaufreihenfolge (tl → tr → br → bl) für Polygon-Zeichnung.
    pub fn outline(&self) -> [Vec2; 4] {
        [self.tl, self.tr, self.br, self.bl]
    }

    /// Verschiebt alle vier Ecken um `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            tl: self.tl + offset,
            tr: self.tr + offset,
            bl: self.bl + offset,
            br: self.br + offset,
        }
    }

    /// Wendet eine Punkt-Abbildung auf alle Ecken an.
    pub fn map(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        Self {
            tl: f(self.tl),
            tr: f(self.tr),
            bl: f(self.bl),
            br: f(self.br),
        }
    }
}

/// Fertiger Quader, wie er mit dem Host ausgetauscht wird.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cuboid {
    pub id: String,
    #[serde(rename = "sourceID", default)]
    pub source_id: String,
    #[serde(default)]
    pub attribute: String,
    #[serde(default = "default_valid")]
    pub valid: bool,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub text_attribute: String,
    pub front_points: PlaneQuad,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_points: Option<PlaneQuad>,
}

fn default_valid() -> bool {
    true
}

/// Quader während des Zeichnens (Rückfläche ggf. noch nicht definiert).
///
/// Gleiche Form wie [`Cuboid`]; gehört exklusiv dem Zeichen-Tool bis zum Commit.
pub type DrawingCuboid = Cuboid;

impl Cuboid {
    /// Position eines Eckpunkts; `None` wenn die Rückfläche fehlt.
    pub fn corner(&self, id: CornerId) -> Option<Vec2> {
        match id.face {
            Face::Front => Some(self.front_points.get(id.corner)),
            Face::Back => self.back_points.map(|b| b.get(id.corner)),
        }
    }

    /// Alle vorhandenen Eckpunkte (4 oder 8) mit ihrer Adresse.
    pub fn corners(&self) -> Vec<(CornerId, Vec2)> {
        let mut out = Vec::with_capacity(8);
        for corner in Corner::ALL {
            out.push((CornerId::front(corner), self.front_points.get(corner)));
        }
        if let Some(back) = &self.back_points {
            for corner in Corner::ALL {
                out.push((CornerId::back(corner), back.get(corner)));
            }
        }
        out
    }

    /// Kopie mit auf alle Punkte angewandter Abbildung (z.B. Bild → Screen).
    pub fn map_points(&self, f: impl Fn(Vec2) -> Vec2 + Copy) -> Self {
        Self {
            front_points: self.front_points.map(f),
            back_points: self.back_points.map(|b| b.map(f)),
            ..self.clone()
        }
    }
}

/// Serialisiert `Vec2` als `{ "x": .., "y": .. }` (Host-Schema).
pub(crate) mod point_serde {
    use glam::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Point {
        x: f32,
        y: f32,
    }

    pub fn serialize<S: Serializer>(v: &Vec2, s: S) -> Result<S::Ok, S::Error> {
        Point { x: v.x, y: v.y }.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec2, D::Error> {
        let p = Point::deserialize(d)?;
        Ok(Vec2::new(p.x, p.y))
    }
}

/// Serialisiert eine Quader-Liste im Host-Schema.
pub fn cuboids_to_json(list: &[Cuboid]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(list)?)
}

/// Liest eine Quader-Liste im Host-Schema.
pub fn cuboids_from_json(json: &str) -> anyhow::Result<Vec<Cuboid>> {
    Ok(serde_json::from_str(json)?)
}
