// crates/gazetteer-core/src/model.rs
use crate::common::{GazetteerStats, Level, OwnershipConflict};
use crate::raw::RawTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The in-memory gazetteer index.
///
/// Built once from the district -> upazila and upazila -> union reference
/// tables, then only read. It holds the forward maps, the derived reverse
/// maps and the flat per-level search lists used when no parent
/// constraint applies.
///
/// All flat lists keep first-seen order from the reference tables; the
/// reverse maps keep the last parent seen for a child listed twice (see
/// [`Gazetteer::conflicts`]).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Gazetteer {
    districts: Vec<String>,
    upazilas_by_district: HashMap<String, Vec<String>>,
    district_by_upazila: HashMap<String, String>,
    upazilas: Vec<String>,

    upazilas_with_unions: Vec<String>,
    unions_by_upazila: HashMap<String, Vec<String>>,
    upazila_by_union: HashMap<String, String>,
    unions: Vec<String>,

    conflicts: Vec<OwnershipConflict>,
}

/// Forward map, reverse map and flat child list for one parent/child pair
/// of levels.
struct LevelIndex {
    parents: Vec<String>,
    children_by_parent: HashMap<String, Vec<String>>,
    parent_by_child: HashMap<String, String>,
    children: Vec<String>,
}

impl Gazetteer {
    /// Builds the index from the two reference tables.
    ///
    /// `districts` maps district -> upazilas, `unions` maps upazila ->
    /// unions. A parent key repeated within one table keeps its first
    /// position and its last child list, like a JSON object would.
    pub fn from_tables(districts: RawTable, unions: RawTable) -> Self {
        let mut conflicts = Vec::new();
        let upper = build_level(districts, Level::Upazila, &mut conflicts);
        let lower = build_level(unions, Level::Union, &mut conflicts);

        log::debug!(
            "gazetteer built: {} districts, {} upazilas, {} unions, {} ownership conflicts",
            upper.parents.len(),
            upper.children.len(),
            lower.children.len(),
            conflicts.len()
        );

        Self {
            districts: upper.parents,
            upazilas_by_district: upper.children_by_parent,
            district_by_upazila: upper.parent_by_child,
            upazilas: upper.children,
            upazilas_with_unions: lower.parents,
            unions_by_upazila: lower.children_by_parent,
            upazila_by_union: lower.parent_by_child,
            unions: lower.children,
            conflicts,
        }
    }

    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            districts: self.districts.len(),
            upazilas: self.upazilas.len(),
            unions: self.unions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty() && self.upazilas_with_unions.is_empty()
    }

    /// Children listed under more than one parent in the reference data.
    pub fn conflicts(&self) -> &[OwnershipConflict] {
        &self.conflicts
    }

    // -----------------------------------------------------------------------
    // Flat lists
    // -----------------------------------------------------------------------

    /// All district names, in reference-table order.
    pub fn all_districts(&self) -> &[String] {
        &self.districts
    }

    /// All upazila names that belong to some district, deduplicated.
    pub fn all_upazilas(&self) -> &[String] {
        &self.upazilas
    }

    /// All union names, deduplicated.
    pub fn all_unions(&self) -> &[String] {
        &self.unions
    }

    /// The unconstrained search list for a level.
    pub fn candidates(&self, level: Level) -> &[String] {
        match level {
            Level::District => &self.districts,
            Level::Upazila => &self.upazilas,
            Level::Union => &self.unions,
        }
    }

    /// Children of `parent` one level below `parent_level`, if the parent is
    /// known. Districts have upazilas, upazilas have unions, unions have
    /// nothing modelled here.
    pub fn children(&self, parent_level: Level, parent: &str) -> Option<&[String]> {
        let map = match parent_level {
            Level::District => &self.upazilas_by_district,
            Level::Upazila => &self.unions_by_upazila,
            Level::Union => return None,
        };
        map.get(parent).map(Vec::as_slice)
    }

    /// The list a [`Level`] matcher searches: the children of `parent` when
    /// the parent is known and has children, otherwise the full level list.
    pub fn search_space(&self, level: Level, parent: Option<&str>) -> &[String] {
        let constrained = match (level.parent(), parent) {
            (Some(parent_level), Some(parent)) if !parent.is_empty() => {
                self.children(parent_level, parent)
            }
            _ => None,
        };
        match constrained {
            Some(children) if !children.is_empty() => children,
            _ => self.candidates(level),
        }
    }

    // -----------------------------------------------------------------------
    // Hierarchy lookups
    // -----------------------------------------------------------------------

    /// Upazilas of a district; empty if the district is unknown.
    pub fn upazilas_for_district(&self, district: &str) -> &[String] {
        self.children(Level::District, district).unwrap_or(&[])
    }

    /// Unions of an upazila; empty if the upazila is unknown.
    pub fn unions_for_upazila(&self, upazila: &str) -> &[String] {
        self.children(Level::Upazila, upazila).unwrap_or(&[])
    }

    /// Owning district of an upazila (reverse map).
    pub fn district_of_upazila(&self, upazila: &str) -> Option<&str> {
        self.district_by_upazila.get(upazila).map(String::as_str)
    }

    /// Owning upazila of a union (reverse map).
    pub fn upazila_of_union(&self, union: &str) -> Option<&str> {
        self.upazila_by_union.get(union).map(String::as_str)
    }

    /// Owning parent of `name` at `level`, if the level has one.
    pub fn parent_of(&self, level: Level, name: &str) -> Option<&str> {
        match level {
            Level::District => None,
            Level::Upazila => self.district_of_upazila(name),
            Level::Union => self.upazila_of_union(name),
        }
    }

    // -----------------------------------------------------------------------
    // Validation (exact names only, no normalization)
    // -----------------------------------------------------------------------

    pub fn is_valid_district(&self, name: &str) -> bool {
        self.upazilas_by_district.contains_key(name)
    }

    /// With a district, checks membership in that district's list;
    /// without one (or with an empty one), checks the whole country.
    pub fn is_valid_upazila(&self, name: &str, district: Option<&str>) -> bool {
        match district.filter(|d| !d.is_empty()) {
            Some(district) => self.upazilas_for_district(district).iter().any(|u| u == name),
            None => self.district_by_upazila.contains_key(name),
        }
    }

    /// Same as [`Gazetteer::is_valid_upazila`], one level down.
    pub fn is_valid_union(&self, name: &str, upazila: Option<&str>) -> bool {
        match upazila.filter(|u| !u.is_empty()) {
            Some(upazila) => self.unions_for_upazila(upazila).iter().any(|u| u == name),
            None => self.upazila_by_union.contains_key(name),
        }
    }

    pub fn is_valid(&self, level: Level, name: &str, parent: Option<&str>) -> bool {
        match level {
            Level::District => self.is_valid_district(name),
            Level::Upazila => self.is_valid_upazila(name, parent),
            Level::Union => self.is_valid_union(name, parent),
        }
    }
}

/// Indexes one reference table whose children live at `child_level`.
fn build_level(
    table: RawTable,
    child_level: Level,
    conflicts: &mut Vec<OwnershipConflict>,
) -> LevelIndex {
    let mut parents: Vec<String> = Vec::with_capacity(table.len());
    let mut children_by_parent: HashMap<String, Vec<String>> = HashMap::with_capacity(table.len());

    for (parent, children) in table.entries {
        if children_by_parent.contains_key(&parent) {
            log::warn!(
                "{} {:?} appears twice in the reference table; keeping the later child list",
                child_level.parent().unwrap_or(child_level),
                parent
            );
        } else {
            parents.push(parent.clone());
        }
        children_by_parent.insert(parent, children);
    }

    let mut parent_by_child: HashMap<String, String> = HashMap::new();
    let mut flat: Vec<String> = Vec::new();

    for parent in &parents {
        for child in &children_by_parent[parent] {
            match parent_by_child.insert(child.clone(), parent.clone()) {
                None => flat.push(child.clone()),
                Some(previous) if previous != *parent => {
                    let conflict = OwnershipConflict {
                        level: child_level,
                        name: child.clone(),
                        previous_parent: previous,
                        parent: parent.clone(),
                    };
                    log::warn!("{conflict}");
                    conflicts.push(conflict);
                }
                Some(_) => {}
            }
        }
    }

    LevelIndex {
        parents,
        children_by_parent,
        parent_by_child,
        children: flat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gazetteer {
        let districts = RawTable::from_pairs([
            ("Dhaka", vec!["Savar", "Dhamrai"]),
            ("Chattogram", vec!["Patiya", "Anwara"]),
        ]);
        let unions = RawTable::from_pairs([
            ("Patiya", vec!["Baluchar", "Kolagaon"]),
            ("Savar", vec!["Ashulia"]),
        ]);
        Gazetteer::from_tables(districts, unions)
    }

    #[test]
    fn flat_lists_keep_table_order() {
        let g = sample();
        assert_eq!(g.all_districts(), ["Dhaka", "Chattogram"]);
        assert_eq!(g.all_upazilas(), ["Savar", "Dhamrai", "Patiya", "Anwara"]);
        assert_eq!(g.all_unions(), ["Baluchar", "Kolagaon", "Ashulia"]);
        assert_eq!(
            g.stats(),
            GazetteerStats {
                districts: 2,
                upazilas: 4,
                unions: 3
            }
        );
    }

    #[test]
    fn reverse_maps() {
        let g = sample();
        assert_eq!(g.district_of_upazila("Patiya"), Some("Chattogram"));
        assert_eq!(g.upazila_of_union("Ashulia"), Some("Savar"));
        assert_eq!(g.district_of_upazila("Atlantis"), None);
        assert_eq!(g.parent_of(Level::Union, "Baluchar"), Some("Patiya"));
        assert_eq!(g.parent_of(Level::District, "Dhaka"), None);
    }

    #[test]
    fn unknown_parents_have_no_children() {
        let g = sample();
        assert!(g.upazilas_for_district("Atlantis").is_empty());
        assert!(g.unions_for_upazila("Dhamrai").is_empty());
        assert_eq!(g.upazilas_for_district("Dhaka"), ["Savar", "Dhamrai"]);
    }

    #[test]
    fn search_space_falls_back_to_full_list() {
        let g = sample();
        assert_eq!(g.search_space(Level::Upazila, Some("Dhaka")), ["Savar", "Dhamrai"]);
        assert_eq!(g.search_space(Level::Upazila, Some("Atlantis")).len(), 4);
        assert_eq!(g.search_space(Level::Upazila, None).len(), 4);
        assert_eq!(g.search_space(Level::Upazila, Some("")).len(), 4);
        // known upazila without unions widens too
        assert_eq!(g.search_space(Level::Union, Some("Dhamrai")).len(), 3);
        // districts have no parent constraint
        assert_eq!(g.search_space(Level::District, Some("Dhaka")).len(), 2);
    }

    #[test]
    fn validation() {
        let g = sample();
        assert!(g.is_valid_district("Dhaka"));
        assert!(!g.is_valid_district("dhaka"));
        assert!(g.is_valid_upazila("Patiya", None));
        assert!(g.is_valid_upazila("Patiya", Some("Chattogram")));
        assert!(!g.is_valid_upazila("Patiya", Some("Dhaka")));
        assert!(g.is_valid_upazila("Patiya", Some("")));
        assert!(g.is_valid_union("Ashulia", None));
        assert!(!g.is_valid_union("Ashulia", Some("Patiya")));
        assert!(g.is_valid(Level::Union, "Baluchar", Some("Patiya")));
    }

    #[test]
    fn duplicate_child_is_last_write_wins() {
        let districts = RawTable::from_pairs([
            ("North", vec!["Shared", "Only North"]),
            ("South", vec!["Shared"]),
        ]);
        let g = Gazetteer::from_tables(districts, RawTable::new());
        assert_eq!(g.district_of_upazila("Shared"), Some("South"));
        assert_eq!(g.all_upazilas(), ["Shared", "Only North"]);
        assert_eq!(
            g.conflicts(),
            [OwnershipConflict {
                level: Level::Upazila,
                name: "Shared".into(),
                previous_parent: "North".into(),
                parent: "South".into(),
            }]
        );
    }

    #[test]
    fn repeated_child_under_same_parent_is_not_a_conflict() {
        let districts = RawTable::from_pairs([("North", vec!["A", "A"])]);
        let g = Gazetteer::from_tables(districts, RawTable::new());
        assert!(g.conflicts().is_empty());
        assert_eq!(g.all_upazilas(), ["A"]);
    }

    #[test]
    fn repeated_parent_key_keeps_position_and_last_list() {
        let districts = RawTable::from_pairs([
            ("A", vec!["old"]),
            ("B", vec!["b1"]),
            ("A", vec!["new"]),
        ]);
        let g = Gazetteer::from_tables(districts, RawTable::new());
        assert_eq!(g.all_districts(), ["A", "B"]);
        assert_eq!(g.upazilas_for_district("A"), ["new"]);
        assert_eq!(g.district_of_upazila("old"), None);
        assert_eq!(g.all_upazilas(), ["new", "b1"]);
    }

    #[test]
    fn empty_gazetteer() {
        let g = Gazetteer::from_tables(RawTable::new(), RawTable::new());
        assert!(g.is_empty());
        assert!(g.all_districts().is_empty());
        assert!(g.search_space(Level::Union, Some("x")).is_empty());
    }
}
