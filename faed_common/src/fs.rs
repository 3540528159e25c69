/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “FAED” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::fs::{self,File};
use std::io::{self,Write,ErrorKind};
use std::path::{Path,PathBuf};

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// replace the contents of `dir`/`filename`, creating `dir` if it does not exist yet.
/// Contents are written to a temporary sibling file first and then renamed so that readers
/// polling the file never see a partially written artifact
pub fn set_filepath_contents (dir: impl AsRef<Path>, filename: &str, new_contents: &[u8]) -> Result<PathBuf> {
    let dir = dir.as_ref();
    ensure_dir( dir)?;

    let path = dir.join( filename);
    let tmp_path = dir.join( format!(".{filename}.tmp"));
    {
        let mut file = File::create(&tmp_path)?;
        file.write_all( new_contents)?;
        file.flush()?;
    }
    fs::rename( &tmp_path, &path)?;

    Ok(path)
}

/// remove `path` if it exists. Returns true if there was a file to remove
pub fn remove_file_if_exists (path: impl AsRef<Path>) -> Result<bool> {
    match fs::remove_file( path.as_ref()) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e)
    }
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    fs::read_to_string( path.as_ref())
}

pub fn filepath_contents <P: AsRef<Path>> (path: &P) -> Result<Vec<u8>> {
    fs::read( path.as_ref())
}
