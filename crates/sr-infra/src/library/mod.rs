mod fs_probe;

pub use fs_probe::FsLibraryProbe;
