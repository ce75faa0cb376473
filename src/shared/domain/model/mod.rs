pub mod bulk_operation_outcome;
