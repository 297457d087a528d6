mod about;
pub use about::{About, AboutSection, AcademyInfo};

mod fencing;
pub use fencing::{Fencing, FencingSection};

mod home;
pub use home::{Hero, Home};

mod instructors;
pub use instructors::{InstructorCard, Instructors, InstructorsSection};

mod one_page;
pub use one_page::OnePage;

mod programs;
pub use programs::{ProgramGrid, Programs, ProgramsSection};
