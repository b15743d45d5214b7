// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 按类别过滤跟踪对象 (a: 仅行人, z: 仅车辆, e: 不过滤)

use super::types::TrackedObject;
use std::fmt;

/// 对象类别过滤器
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassFilter {
    #[default]
    All,
    Person,
    Vehicle,
}

const PERSON_LABELS: [&str; 2] = ["person", "pedestrian"];
const VEHICLE_LABELS: [&str; 6] = ["vehicle", "car", "truck", "bus", "motorcycle", "bicycle"];

impl ClassFilter {
    /// 无标签对象只在 `All` 下保留
    pub fn accepts(&self, object: &TrackedObject) -> bool {
        let labels: &[&str] = match self {
            ClassFilter::All => return true,
            ClassFilter::Person => &PERSON_LABELS,
            ClassFilter::Vehicle => &VEHICLE_LABELS,
        };
        object
            .label
            .as_deref()
            .map(|label| labels.iter().any(|l| label.eq_ignore_ascii_case(l)))
            .unwrap_or(false)
    }
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassFilter::All => write!(f, "No filter"),
            ClassFilter::Person => write!(f, "Person only"),
            ClassFilter::Vehicle => write!(f, "Vehicle only"),
        }
    }
}

/// 保留通过过滤器的对象, 顺序不变
pub fn filter_objects(objects: &[TrackedObject], filter: ClassFilter) -> Vec<TrackedObject> {
    objects
        .iter()
        .filter(|object| filter.accepts(object))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::types::{BoundingBox2D, Position};
    use crate::detection::violation::detect_violation;

    fn labeled(id: i32, z: f32, label: &str) -> TrackedObject {
        TrackedObject::new(id, Position::new(0.0, 0.0, z), BoundingBox2D::default())
            .with_label(label)
    }

    #[test]
    fn test_person_vehicle_pair_not_violated_under_person() {
        let objects = [labeled(1, 0.0, "PERSON"), labeled(2, 1500.0, "VEHICLE")];
        assert!(detect_violation(&objects));

        let persons = filter_objects(&objects, ClassFilter::Person);
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].id, 1);
        assert!(!detect_violation(&persons));
    }

    #[test]
    fn test_two_persons_still_violate() {
        let objects = [
            labeled(1, 0.0, "person"),
            labeled(2, 500.0, "car"),
            labeled(3, 1500.0, "Person"),
        ];
        let persons = filter_objects(&objects, ClassFilter::Person);
        assert_eq!(persons.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(detect_violation(&persons));
    }

    #[test]
    fn test_vehicle_filter() {
        let objects = [labeled(1, 0.0, "person"), labeled(2, 500.0, "truck")];
        let vehicles = filter_objects(&objects, ClassFilter::Vehicle);
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].id, 2);
    }

    #[test]
    fn test_unlabeled_objects() {
        let unlabeled = TrackedObject::new(7, Position::default(), BoundingBox2D::default());
        assert!(ClassFilter::All.accepts(&unlabeled));
        assert!(!ClassFilter::Person.accepts(&unlabeled));
        assert!(!ClassFilter::Vehicle.accepts(&unlabeled));
        assert_eq!(filter_objects(&[unlabeled], ClassFilter::All).len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(ClassFilter::Person.to_string(), "Person only");
        assert_eq!(ClassFilter::Vehicle.to_string(), "Vehicle only");
        assert_eq!(ClassFilter::default().to_string(), "No filter");
    }
}
