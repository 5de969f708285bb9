pub mod points_computation;
