pub mod best_effort_queue;
