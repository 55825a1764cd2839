//! Frame model - main structural model container

mod arena;
mod data;

use log::{info, warn};
use serde::Deserialize;

use self::arena::Arena;
use self::data::ModelData;
use crate::analysis::{self, AnalysisOptions, Assembler, StructureView};
use crate::elements::{Bar, BarId, BarReleases, Material, MaterialId, Node, NodeId, Section, SectionId, Support};
use crate::error::{FrameError, FrameResult};
use crate::fixed_end::{check_finite, check_position, check_span};
use crate::internal_forces::{BarDiagram, Quantity, SideValues};
use crate::loads::{LoadCase, LoadCombination, LoadRecord};
use crate::math::frame::MIN_LENGTH;
use crate::math::Vec12;
use crate::results::{AnalysisResults, AnalysisSummary, BarForces, CaseResults, NodeDisplacement, Reactions};

/// A 3D frame: nodes, bars, supports and load cases, plus the latest results
///
/// Records are addressed by the ids returned when they are added. Any change to
/// the structure or its loads drops the stored results. A deserialized model is
/// rebuilt through the same checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "ModelData")]
pub struct FrameModel {
    nodes: Arena<Node>,
    sections: Arena<Section>,
    materials: Arena<Material>,
    bars: Arena<Bar>,
    /// Bumped whenever a bar changes, keys the element cache
    revisions: Vec<u64>,
    /// Parallel to `nodes`
    supports: Vec<Option<Support>>,
    load_cases: Vec<LoadCase>,
    combinations: Vec<LoadCombination>,

    assembler: Assembler,
    results: Option<AnalysisResults>,
}

impl FrameModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node to the model
    pub fn add_node(&mut self, name: &str, node: Node) -> FrameResult<NodeId> {
        if !node.is_finite() {
            return Err(FrameError::InvalidGeometry(format!(
                "node '{name}' has non-finite coordinates {:?}",
                node.coords()
            )));
        }
        let id = self.nodes.insert(name, node)?;
        self.supports.push(None);
        self.results = None;
        Ok(NodeId(id))
    }

    /// Add a section to the model
    pub fn add_section(&mut self, name: &str, section: Section) -> FrameResult<SectionId> {
        section.validate(name)?;
        let id = self.sections.insert(name, section)?;
        Ok(SectionId(id))
    }

    /// Add a material to the model
    pub fn add_material(&mut self, name: &str, material: Material) -> FrameResult<MaterialId> {
        material.validate(name)?;
        let id = self.materials.insert(name, material)?;
        Ok(MaterialId(id))
    }

    /// Add a bar to the model
    pub fn add_bar(&mut self, name: &str, bar: Bar) -> FrameResult<BarId> {
        let start = self.node(bar.start)?;
        let end = self.node(bar.end)?;
        self.section(bar.section)?;
        self.material(bar.material)?;

        if bar.start == bar.end {
            return Err(FrameError::InvalidGeometry(format!(
                "bar '{name}' starts and ends at node '{}'",
                self.node_name(bar.start)?
            )));
        }
        let length = start.distance_to(end);
        if length <= MIN_LENGTH {
            return Err(FrameError::InvalidGeometry(format!(
                "bar '{name}' has zero length between '{}' and '{}'",
                self.node_name(bar.start)?,
                self.node_name(bar.end)?
            )));
        }
        check_finite("bar rotation", bar.rotation)?;

        let id = self.bars.insert(name, bar)?;
        self.revisions.push(0);
        self.results = None;
        Ok(BarId(id))
    }

    /// Add or replace the support at a node
    pub fn add_support(&mut self, node: NodeId, support: Support) -> FrameResult<()> {
        self.node(node)?;
        support.validate()?;
        self.supports[node.index()] = Some(support);
        self.results = None;
        Ok(())
    }

    /// Add a load case; every load is checked against the current structure
    pub fn add_load_case(&mut self, case: LoadCase) -> FrameResult<()> {
        self.check_new_case_name(&case.name)?;
        for record in &case.loads {
            self.validate_record(record).map_err(|err| match err {
                FrameError::InvalidInput(msg) => FrameError::InvalidInput(format!(
                    "load '{}' in case '{}': {msg}",
                    record.name(),
                    case.name
                )),
                other => other,
            })?;
        }
        self.load_cases.push(case);
        self.results = None;
        Ok(())
    }

    /// Add a load combination of existing load cases
    pub fn add_load_combination(&mut self, combo: LoadCombination) -> FrameResult<()> {
        self.check_new_case_name(&combo.name)?;
        for (case, factor) in &combo.factors {
            self.load_case(case)?;
            check_finite("combination factor", *factor)?;
        }
        self.combinations.push(combo);
        self.results = None;
        Ok(())
    }

    /// Roll a bar about its own axis
    pub fn set_bar_rotation(&mut self, bar: BarId, rotation: f64) -> FrameResult<()> {
        check_finite("bar rotation", rotation)?;
        self.bar_mut(bar)?.rotation = rotation;
        self.touch(bar);
        Ok(())
    }

    /// Replace a bar's end releases
    pub fn set_bar_releases(&mut self, bar: BarId, releases: BarReleases) -> FrameResult<()> {
        self.bar_mut(bar)?.releases = releases;
        self.touch(bar);
        Ok(())
    }

    fn touch(&mut self, bar: BarId) {
        self.revisions[bar.index()] += 1;
        self.results = None;
    }

    fn check_new_case_name(&self, name: &str) -> FrameResult<()> {
        let taken = self.load_cases.iter().any(|c| c.name == name)
            || self.combinations.iter().any(|c| c.name == name);
        if taken {
            Err(FrameError::DuplicateName(name.to_string()))
        } else {
            Ok(())
        }
    }

    fn validate_record(&self, record: &LoadRecord) -> FrameResult<()> {
        match record {
            LoadRecord::Nodal { node, load } => {
                self.node(*node)?;
                for value in load.as_array() {
                    check_finite("nodal load", value)?;
                }
            }
            LoadRecord::BarPoint { bar, load } => {
                let length = self.bar_length(*bar)?;
                check_position(length, load.position)?;
                for value in load.actions {
                    check_finite("point load", value)?;
                }
            }
            LoadRecord::BarDistributed { bar, load } => {
                let length = self.bar_length(*bar)?;
                let (x1, x2) = load.span(length);
                check_span(length, x1, x2)?;
                check_finite("line load", load.p1)?;
                check_finite("line load", load.p2)?;
            }
        }
        Ok(())
    }

    // ========================
    // Lookups
    // ========================

    pub fn node_id(&self, name: &str) -> FrameResult<NodeId> {
        self.nodes
            .position(name)
            .map(NodeId)
            .ok_or_else(|| FrameError::NodeNotFound(name.to_string()))
    }

    pub fn bar_id(&self, name: &str) -> FrameResult<BarId> {
        self.bars
            .position(name)
            .map(BarId)
            .ok_or_else(|| FrameError::BarNotFound(name.to_string()))
    }

    pub fn section_id(&self, name: &str) -> FrameResult<SectionId> {
        self.sections
            .position(name)
            .map(SectionId)
            .ok_or_else(|| FrameError::SectionNotFound(name.to_string()))
    }

    pub fn material_id(&self, name: &str) -> FrameResult<MaterialId> {
        self.materials
            .position(name)
            .map(MaterialId)
            .ok_or_else(|| FrameError::MaterialNotFound(name.to_string()))
    }

    pub fn node(&self, id: NodeId) -> FrameResult<&Node> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| FrameError::NodeNotFound(id.to_string()))
    }

    pub fn bar(&self, id: BarId) -> FrameResult<&Bar> {
        self.bars
            .get(id.index())
            .ok_or_else(|| FrameError::BarNotFound(id.to_string()))
    }

    fn bar_mut(&mut self, id: BarId) -> FrameResult<&mut Bar> {
        self.bars
            .get_mut(id.index())
            .ok_or_else(|| FrameError::BarNotFound(id.to_string()))
    }

    pub fn section(&self, id: SectionId) -> FrameResult<&Section> {
        self.sections
            .get(id.index())
            .ok_or_else(|| FrameError::SectionNotFound(id.to_string()))
    }

    pub fn material(&self, id: MaterialId) -> FrameResult<&Material> {
        self.materials
            .get(id.index())
            .ok_or_else(|| FrameError::MaterialNotFound(id.to_string()))
    }

    pub fn support(&self, id: NodeId) -> Option<&Support> {
        self.supports.get(id.index()).and_then(Option::as_ref)
    }

    pub fn node_name(&self, id: NodeId) -> FrameResult<&str> {
        self.nodes
            .name(id.index())
            .ok_or_else(|| FrameError::NodeNotFound(id.to_string()))
    }

    pub fn bar_name(&self, id: BarId) -> FrameResult<&str> {
        self.bars
            .name(id.index())
            .ok_or_else(|| FrameError::BarNotFound(id.to_string()))
    }

    /// Distance between a bar's end nodes
    pub fn bar_length(&self, id: BarId) -> FrameResult<f64> {
        let bar = self.bar(id)?;
        Ok(self.node(bar.start)?.distance_to(self.node(bar.end)?))
    }

    pub fn load_case(&self, name: &str) -> FrameResult<&LoadCase> {
        self.load_cases
            .iter()
            .find(|case| case.name == name)
            .ok_or_else(|| FrameError::LoadCaseNotFound(name.to_string()))
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_bars(&self) -> usize {
        self.bars.len()
    }

    /// Load case names followed by combination names
    pub fn case_names(&self) -> Vec<String> {
        self.load_cases
            .iter()
            .map(|case| case.name.clone())
            .chain(self.combinations.iter().map(|combo| combo.name.clone()))
            .collect()
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Run linear static analysis with default options
    pub fn analyze(&mut self) -> FrameResult<()> {
        self.analyze_with(&AnalysisOptions::default())
    }

    /// Run linear static analysis
    pub fn analyze_with(&mut self, options: &AnalysisOptions) -> FrameResult<()> {
        self.results = None;

        let view = StructureView {
            node_names: self.nodes.names(),
            bar_names: self.bars.names(),
            nodes: self.nodes.items(),
            bars: self.bars.items(),
            revisions: &self.revisions,
            sections: self.sections.items(),
            materials: self.materials.items(),
            supports: &self.supports,
        };
        let mut cases = analysis::solve_cases(&view, &mut self.assembler, &self.load_cases, options)?;

        for combo in &self.combinations {
            let mut combined = CaseResults::empty(&combo.name, self.nodes.len(), self.bars.len());
            for (case, factor) in &combo.factors {
                let solved = cases
                    .iter()
                    .find(|solved| &solved.name == case)
                    .ok_or_else(|| FrameError::LoadCaseNotFound(case.clone()))?;
                combined.add_scaled(solved, *factor);
            }
            cases.push(combined);
        }

        info!(
            "analysis complete: {} load cases, {} combinations",
            self.load_cases.len(),
            self.combinations.len()
        );
        self.results = Some(AnalysisResults { cases });
        Ok(())
    }

    /// Check if model has been analyzed since the last change
    pub fn is_analyzed(&self) -> bool {
        self.results.is_some()
    }

    pub fn results(&self) -> FrameResult<&AnalysisResults> {
        self.results.as_ref().ok_or(FrameError::NotAnalyzed)
    }

    /// Results of one load case or combination
    pub fn case_results(&self, case: &str) -> FrameResult<&CaseResults> {
        self.results()?
            .get(case)
            .ok_or_else(|| FrameError::LoadCaseNotFound(case.to_string()))
    }

    // ========================
    // Result Access Methods
    // ========================

    /// Get node displacement
    pub fn node_displacement(&self, node: NodeId, case: &str) -> FrameResult<NodeDisplacement> {
        self.node(node)?;
        Ok(self.case_results(case)?.node_displacement(node.index()))
    }

    /// Get node reactions
    pub fn node_reactions(&self, node: NodeId, case: &str) -> FrameResult<Reactions> {
        self.node(node)?;
        Ok(self.case_results(case)?.node_reactions(node.index()))
    }

    /// Local end forces [FXi .. MZj] acting on the bar
    pub fn bar_end_forces(&self, bar: BarId, case: &str) -> FrameResult<Vec12> {
        self.bar(bar)?;
        Ok(self.case_results(case)?.end_forces[bar.index()])
    }

    /// Section forces at the start of a bar
    pub fn bar_forces_start(&self, bar: BarId, case: &str) -> FrameResult<BarForces> {
        Ok(BarForces::from_start(&self.bar_end_forces(bar, case)?))
    }

    /// Section forces at the end of a bar
    pub fn bar_forces_end(&self, bar: BarId, case: &str) -> FrameResult<BarForces> {
        Ok(BarForces::from_end(&self.bar_end_forces(bar, case)?))
    }

    /// End forces and point loads of a bar, ready for diagram queries
    pub fn bar_diagram(&self, bar: BarId, case: &str) -> FrameResult<BarDiagram> {
        let length = self.bar_length(bar)?;
        let results = self.case_results(case)?;
        let i = bar.index();
        if results.distributed[i] {
            warn!(
                "bar '{}' carries distributed loads in '{case}'; diagrams only include point loads",
                self.bar_name(bar)?
            );
        }
        Ok(BarDiagram::new(length, results.end_forces[i], results.point_loads[i].clone()))
    }

    pub fn shear_y(&self, bar: BarId, x: f64, case: &str) -> FrameResult<SideValues> {
        self.bar_diagram(bar, case)?.evaluate(Quantity::ShearY, x)
    }

    pub fn shear_z(&self, bar: BarId, x: f64, case: &str) -> FrameResult<SideValues> {
        self.bar_diagram(bar, case)?.evaluate(Quantity::ShearZ, x)
    }

    pub fn moment_y(&self, bar: BarId, x: f64, case: &str) -> FrameResult<SideValues> {
        self.bar_diagram(bar, case)?.evaluate(Quantity::MomentY, x)
    }

    pub fn moment_z(&self, bar: BarId, x: f64, case: &str) -> FrameResult<SideValues> {
        self.bar_diagram(bar, case)?.evaluate(Quantity::MomentZ, x)
    }

    pub fn axial(&self, bar: BarId, x: f64, case: &str) -> FrameResult<SideValues> {
        self.bar_diagram(bar, case)?.evaluate(Quantity::Axial, x)
    }

    pub fn torsion(&self, bar: BarId, x: f64, case: &str) -> FrameResult<SideValues> {
        self.bar_diagram(bar, case)?.evaluate(Quantity::Torsion, x)
    }

    /// Get analysis summary
    pub fn summary(&self, case: &str) -> FrameResult<AnalysisSummary> {
        let results = self.case_results(case)?;
        let total_dofs = self.nodes.len() * 6;
        let fixed: usize = self
            .supports
            .iter()
            .flatten()
            .map(|support| support.fixed_dofs().len())
            .sum();

        let mut summary = AnalysisSummary {
            num_nodes: self.nodes.len(),
            num_bars: self.bars.len(),
            total_dofs,
            free_dofs: total_dofs - fixed,
            ..Default::default()
        };

        for (i, name) in self.nodes.names().iter().enumerate() {
            let disp = results.node_displacement(i).translation_magnitude();
            if disp > summary.max_displacement {
                summary.max_displacement = disp;
                summary.max_disp_node = name.clone();
            }
            let reaction = results.node_reactions(i).force_magnitude();
            if reaction > summary.max_reaction {
                summary.max_reaction = reaction;
                summary.max_reaction_node = name.clone();
            }
        }

        for (forces, name) in results.end_forces.iter().zip(self.bars.names()) {
            let axial = forces[0].abs().max(forces[6].abs());
            if axial > summary.max_axial {
                summary.max_axial = axial;
                summary.max_axial_bar = name.clone();
            }
            let moment = [4, 5, 10, 11].iter().map(|&i| forces[i].abs()).fold(0.0, f64::max);
            if moment > summary.max_moment {
                summary.max_moment = moment;
                summary.max_moment_bar = name.clone();
            }
        }

        Ok(summary)
    }
}
