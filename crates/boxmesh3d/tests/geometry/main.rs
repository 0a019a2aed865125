mod box_triangle_scenarios;
mod indexed_triangles;
