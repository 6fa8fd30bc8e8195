mod vision_response_tests;
mod contour_tests;
mod layout_tests;
