pub mod dijkstra_data;
pub mod predecessors;
pub mod union_find;
pub mod vertex_distance_queue;
pub mod vertex_expanded_data;
