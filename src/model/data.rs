//! Serialized form of a frame model
//!
//! A model is written as plain named lists and read back by replaying the
//! `add_*` builders, so a stored model passes the same checks as one built in
//! code. Ids are list positions and survive the round trip unchanged.

use serde::{Deserialize, Serialize, Serializer};

use super::FrameModel;
use crate::elements::{Bar, Material, Node, NodeId, Section, Support};
use crate::error::FrameError;
use crate::loads::{LoadCase, LoadCombination};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Named<T> {
    name: String,
    value: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ModelData {
    nodes: Vec<Named<Node>>,
    sections: Vec<Named<Section>>,
    materials: Vec<Named<Material>>,
    bars: Vec<Named<Bar>>,
    #[serde(default)]
    supports: Vec<(NodeId, Support)>,
    #[serde(default)]
    load_cases: Vec<LoadCase>,
    #[serde(default)]
    combinations: Vec<LoadCombination>,
}

fn named<T: Copy>(names: &[String], items: &[T]) -> Vec<Named<T>> {
    names
        .iter()
        .zip(items)
        .map(|(name, value)| Named {
            name: name.clone(),
            value: *value,
        })
        .collect()
}

impl From<&FrameModel> for ModelData {
    fn from(model: &FrameModel) -> Self {
        Self {
            nodes: named(model.nodes.names(), model.nodes.items()),
            sections: named(model.sections.names(), model.sections.items()),
            materials: named(model.materials.names(), model.materials.items()),
            bars: named(model.bars.names(), model.bars.items()),
            supports: model
                .supports
                .iter()
                .enumerate()
                .filter_map(|(i, support)| support.map(|s| (NodeId(i), s)))
                .collect(),
            load_cases: model.load_cases.clone(),
            combinations: model.combinations.clone(),
        }
    }
}

impl TryFrom<ModelData> for FrameModel {
    type Error = FrameError;

    fn try_from(data: ModelData) -> Result<Self, Self::Error> {
        let mut model = FrameModel::new();
        for Named { name, value } in data.nodes {
            model.add_node(&name, value)?;
        }
        for Named { name, value } in data.sections {
            model.add_section(&name, value)?;
        }
        for Named { name, value } in data.materials {
            model.add_material(&name, value)?;
        }
        for Named { name, value } in data.bars {
            model.add_bar(&name, value)?;
        }
        for (node, support) in data.supports {
            model.add_support(node, support)?;
        }
        for case in data.load_cases {
            model.add_load_case(case)?;
        }
        for combo in data.combinations {
            model.add_load_combination(combo)?;
        }
        Ok(model)
    }
}

impl Serialize for FrameModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ModelData::from(self).serialize(serializer)
    }
}
