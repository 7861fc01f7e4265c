//! Section domain entity

use crate::domain::entity::Entity;

/// Storage section inside a warehouse. Temperatures are in degrees Celsius,
/// capacities in product units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: i32,
    pub section_number: i32,
    pub current_temperature: i32,
    pub minimum_temperature: i32,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateSection {
    pub section_number: i32,
    pub current_temperature: i32,
    pub minimum_temperature: i32,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SectionPatch {
    pub section_number: Option<i32>,
    pub current_temperature: Option<i32>,
    pub minimum_temperature: Option<i32>,
    pub current_capacity: Option<i32>,
    pub minimum_capacity: Option<i32>,
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<i32>,
    pub product_type_id: Option<i32>,
}

fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl Entity for Section {
    type Create = CreateSection;
    type Patch = SectionPatch;
    type Key = i32;

    const NAME: &'static str = "Section";
    const UNIQUE_FIELD: &'static str = "section_number";

    fn id(&self) -> i32 {
        self.id
    }

    fn unique_key(&self) -> &i32 {
        &self.section_number
    }

    fn create_key(request: &CreateSection) -> &i32 {
        &request.section_number
    }

    fn patch_key(patch: &SectionPatch) -> Option<&i32> {
        patch.section_number.as_ref()
    }

    fn from_create(id: i32, r: CreateSection) -> Self {
        Self {
            id,
            section_number: r.section_number,
            current_temperature: r.current_temperature,
            minimum_temperature: r.minimum_temperature,
            current_capacity: r.current_capacity,
            minimum_capacity: r.minimum_capacity,
            maximum_capacity: r.maximum_capacity,
            warehouse_id: r.warehouse_id,
            product_type_id: r.product_type_id,
        }
    }

    fn merge(&mut self, p: SectionPatch) {
        overwrite(&mut self.section_number, p.section_number);
        overwrite(&mut self.current_temperature, p.current_temperature);
        overwrite(&mut self.minimum_temperature, p.minimum_temperature);
        overwrite(&mut self.current_capacity, p.current_capacity);
        overwrite(&mut self.minimum_capacity, p.minimum_capacity);
        overwrite(&mut self.maximum_capacity, p.maximum_capacity);
        overwrite(&mut self.warehouse_id, p.warehouse_id);
        overwrite(&mut self.product_type_id, p.product_type_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Section {
        Section {
            id: 1,
            section_number: 10,
            current_temperature: 5,
            minimum_temperature: -2,
            current_capacity: 40,
            minimum_capacity: 10,
            maximum_capacity: 100,
            warehouse_id: 1,
            product_type_id: 2,
        }
    }

    #[test]
    fn merge_keeps_omitted_fields() {
        let mut section = sample();
        section.merge(SectionPatch {
            current_capacity: Some(55),
            minimum_temperature: Some(0),
            ..Default::default()
        });

        assert_eq!(section.current_capacity, 55);
        assert_eq!(section.minimum_temperature, 0);
        assert_eq!(section.section_number, 10);
        assert_eq!(section.maximum_capacity, 100);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut section = sample();
        section.merge(SectionPatch::default());
        assert_eq!(section, sample());
    }
}
