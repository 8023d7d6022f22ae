use crate::creator::{Creator, CreatorName};
use crate::records::ItemRecord;
use bibrec_schemas::{Registry, RegistryError};

/// A blank record for `item_type`: every registry field set to the empty
/// string, and one empty personal creator in the primary role when the type
/// accepts creators.
pub fn template_with(registry: &Registry, item_type: &str) -> Result<ItemRecord, RegistryError> {
    let def = registry.lookup(item_type)?;
    let mut record = ItemRecord::new(def.item_type);
    record.fields = def
        .fields
        .iter()
        .map(|field| (field.field.to_string(), String::new()))
        .collect();
    if !def.creator_types.is_empty() {
        record.creators.push(Creator::new(
            registry.primary_creator_type(def.item_type),
            CreatorName::personal("", ""),
        ));
    }
    Ok(record)
}
